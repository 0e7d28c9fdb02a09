use crate::cli::commands::resolve_policy;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::models::calc_summary::CalcSummary;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::formatting::{bold, with_suffix};
use crate::utils::time::parse_optional_time;

/// Handle the `calc` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        completed,
        last_break,
        policy,
        wrap,
        suffix,
        no_suffix,
        json,
    } = cmd
    {
        let policy = resolve_policy(policy.as_deref(), cfg)?;
        let completed = parse_optional_time(completed.as_deref())?;
        let last_break = parse_optional_time(last_break.as_deref())?;

        let summary = match Core::build_summary(completed, last_break, &policy) {
            Ok(s) => s,
            Err(e) => {
                db::log_operation(cfg, "invalid", "calc", &e.to_string());
                return Err(e);
            }
        };

        db::log_operation(
            cfg,
            "calc",
            &format!("{} / {}", summary.completed, summary.last_break),
            &format!("logout {} (policy {})", summary.logout, summary.policy),
        );

        if *json {
            let out = serde_json::to_string_pretty(&summary)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        let wrap = *wrap || cfg.wrap_hours;
        let suffix = if *no_suffix {
            ""
        } else {
            suffix.as_deref().unwrap_or(&cfg.display_suffix)
        };

        print_summary(&summary, wrap, suffix);
    }

    Ok(())
}

fn print_summary(summary: &CalcSummary, wrap: bool, suffix: &str) {
    let remaining = summary.remaining_minutes;
    let logout = with_suffix(&summary.logout.format(wrap), suffix);

    println!("⏱️  Completed   : {}", summary.completed);
    println!("☕ Last break  : {}", summary.last_break);
    println!("📏 Policy      : {}", summary.policy);
    println!(
        "⏳ Remaining   : {}{}{}",
        color_for_remaining(remaining),
        summary.remaining,
        RESET
    );
    println!("🚪 Logout time : {}", bold(&logout));

    if summary.over_completed {
        warning(format!(
            "Completed time already exceeds the {} policy: the logout time lies before the last break.",
            summary.policy
        ));
    }

    if !wrap && summary.logout.is_out_of_day() {
        warning(format!(
            "Logout time falls outside the day ({} on the clock, use --wrap).",
            summary.logout.wrapped()
        ));
    }
}
