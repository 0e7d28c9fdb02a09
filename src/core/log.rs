use crate::db::log::{LogEntry, read_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use std::borrow::Cow;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> Cow<'_, str> {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, ""),
        Err(_) => Cow::Borrowed(s),
    }
}

/// ANSI color for each operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "calc" => Colour::Green,
        "invalid" => Colour::Red,
        "reset" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// `operation (target)`, with only the operation colored, cut to
/// [`MAX_OP_WIDTH`] visible characters.
fn render_op_target(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);

    let visible = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = read_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<String> = entries.iter().map(render_op_target).collect();

        let op_w = rendered
            .iter()
            .map(|r| strip_ansi(r).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, op_target) in entries.iter().zip(rendered) {
            // padding on the visible width, ANSI excluded
            let visible_w = strip_ansi(&op_target).chars().count();
            let padding = " ".repeat(op_w.saturating_sub(visible_w));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                op_target,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
