//! Status lines for the terminal: an icon, a colored tag, the message.
//! Success and info go to stdout; warnings and errors to stderr so that
//! `calc --json` output stays machine readable.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(self) -> Style {
        let colour = match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        };
        colour.bold()
    }
}

/// One status line, without the trailing newline.
pub fn render<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{} {}", level.style().paint(level.icon()), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, msg));
}
