use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "reserve" => Colour::Green,
        "reserve_failed" => Colour::Red,
        "check" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, truncated to `MAX_OP_WIDTH` terminal columns.
fn op_target(entry: &LogEntry) -> String {
    let raw = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if UnicodeWidthStr::width(raw.as_str()) <= MAX_OP_WIDTH {
        return raw;
    }

    let mut s = String::new();
    let mut used = 0;
    for c in raw.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > MAX_OP_WIDTH - 3 {
            break;
        }
        used += w;
        s.push(c);
    }
    s.push_str("...");
    s
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, operation: Option<&str>) -> AppResult<()> {
        let entries = load_entries(&pool.conn, operation)?;

        if entries.is_empty() {
            info("Internal log is empty");
            return Ok(());
        }

        let labels: Vec<String> = entries.iter().map(op_target).collect();
        let op_w = labels
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(10);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);

        println!("📜 Internal log:\n");

        for (entry, label) in entries.iter().zip(labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            // only the operation word is coloured; padding is computed on the
            // visible text
            let visible = UnicodeWidthStr::width(label.as_str());
            let padding = " ".repeat(op_w.saturating_sub(visible));
            let colour = color_for_operation(&entry.operation);
            let rendered = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
                None => colour.paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<25} | {}{} => {}",
                entry.id,
                date,
                rendered,
                padding,
                entry.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
