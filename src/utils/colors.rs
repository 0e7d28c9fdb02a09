/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Remaining-time color:
/// \>0 → green (still to work)
/// \<0 → red (policy already exceeded)
/// 0 → reset
pub fn color_for_remaining(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Grey for an unset session input (`--:--`), reset otherwise.
pub fn colorize_optional(value: Option<String>) -> String {
    match value {
        Some(v) => v,
        None => format!("{GREY}--:--{RESET}"),
    }
}
