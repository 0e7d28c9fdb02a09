//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Append the display label (e.g. "PM") to a formatted time.
/// An empty or blank suffix leaves the time alone.
pub fn with_suffix(time: &str, suffix: &str) -> String {
    let suffix = suffix.trim();
    if suffix.is_empty() {
        time.to_string()
    } else {
        format!("{} {}", time, suffix)
    }
}
