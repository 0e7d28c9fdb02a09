//! Line-oriented front end for [`Session`].
//!
//! Reads one command per line and prints the outcome and the new state
//! after each of them.

use crate::cli::commands::resolve_policy;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::with_suffix;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  completed HH:MM      set the working time already completed
  break HH:MM          set the time of the last break
  clear completed|break
  calc                 calculate the logout time
  reset                clear everything
  state                show inputs, result and state
  help                 show this help
  quit                 leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetCompleted(Option<TimeOfDay>),
    SetLastBreak(Option<TimeOfDay>),
    Calculate,
    Reset,
    State,
    Help,
    Quit,
    Nothing,
}

/// Display options shared by every output line.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub wrap: bool,
    pub suffix: String,
}

pub fn parse_command(line: &str) -> AppResult<SessionCommand> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(SessionCommand::Nothing);
    };
    let arg = parts.next();
    let unknown = || AppError::UnknownCommand(line.trim().to_string());

    if parts.next().is_some() {
        return Err(unknown());
    }

    let cmd = match (word.to_lowercase().as_str(), arg) {
        ("completed" | "c", Some(t)) => SessionCommand::SetCompleted(Some(TimeOfDay::parse(t)?)),
        ("break" | "b", Some(t)) => SessionCommand::SetLastBreak(Some(TimeOfDay::parse(t)?)),
        ("clear", Some(field)) => match field.to_lowercase().as_str() {
            "completed" | "c" => SessionCommand::SetCompleted(None),
            "break" | "b" => SessionCommand::SetLastBreak(None),
            _ => return Err(unknown()),
        },
        ("calc" | "calculate", None) => SessionCommand::Calculate,
        ("reset", None) => SessionCommand::Reset,
        ("state", None) => SessionCommand::State,
        ("help" | "?", None) => SessionCommand::Help,
        ("quit" | "exit" | "q", None) => SessionCommand::Quit,
        _ => return Err(unknown()),
    };

    Ok(cmd)
}

fn describe(session: &Session, view: &SessionView) -> String {
    let result = session
        .result()
        .map(|r| with_suffix(&r.format(view.wrap), &view.suffix));
    format!(
        "completed: {} | last break: {} | result: {} | state: {}",
        colorize_optional(session.completed().map(|t| t.to_string())),
        colorize_optional(session.last_break().map(|t| t.to_string())),
        colorize_optional(result),
        session.state()
    )
}

/// Drive `session` from `input` until EOF or `quit`.
///
/// `on_event(operation, target, message)` is called after each calculation
/// and reset so the caller can record it.
pub fn run_session<R, W, F>(
    input: R,
    out: &mut W,
    session: &mut Session,
    view: &SessionView,
    mut on_event: F,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str, &str, &str),
{
    writeln!(
        out,
        "🕒 Logout session (policy {}). Type 'help' for commands.",
        session.policy()
    )?;

    for line in input.lines() {
        let line = line?;

        let cmd = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "❌ {}", e)?;
                continue;
            }
        };

        match cmd {
            SessionCommand::Nothing => continue,
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::State => writeln!(out, "{}", describe(session, view))?,
            SessionCommand::SetCompleted(t) => {
                session.set_completed(t);
                writeln!(out, "{}", describe(session, view))?;
            }
            SessionCommand::SetLastBreak(t) => {
                session.set_last_break(t);
                writeln!(out, "{}", describe(session, view))?;
            }
            SessionCommand::Calculate => {
                let target = format!(
                    "{} / {}",
                    session.completed().map(|t| t.to_string()).unwrap_or_default(),
                    session.last_break().map(|t| t.to_string()).unwrap_or_default()
                );
                match session.calculate() {
                    Ok(t) => {
                        let shown = with_suffix(&t.format(view.wrap), &view.suffix);
                        writeln!(out, "🚪 Logout time: {}", shown)?;
                        on_event("calc", &target, &format!("logout {}", t));
                    }
                    Err(e) => {
                        writeln!(out, "❌ {}", e)?;
                        on_event("invalid", "session", &e.to_string());
                    }
                }
                writeln!(out, "{}", describe(session, view))?;
            }
            SessionCommand::Reset => {
                session.reset();
                writeln!(out, "🔄 Session reset")?;
                writeln!(out, "{}", describe(session, view))?;
                on_event("reset", "", "session reset");
            }
        }
    }

    Ok(())
}

/// Handle the `session` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { policy, wrap } = cmd {
        let policy = resolve_policy(policy.as_deref(), cfg)?;
        let mut session = Session::new(policy);
        let view = SessionView {
            wrap: *wrap || cfg.wrap_hours,
            suffix: cfg.display_suffix.clone(),
        };

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_session(
            stdin.lock(),
            &mut stdout,
            &mut session,
            &view,
            |op, target, msg| db::log_operation(cfg, op, target, msg),
        )?;
    }

    Ok(())
}
