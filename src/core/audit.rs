//! Rendering of the internal `log` table.

use crate::errors::{AppError, AppResult};
use crate::store::Store;
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" | "room_add" => Colour::Green,
        "logout" | "store_reset" => Colour::Yellow,
        "room_del" | "reset" => Colour::Red,
        "mode" | "migration_applied" => Colour::Purple,
        "email" => Colour::Blue,
        "register" => Colour::Cyan,
        "setup" | "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(store: &Store) -> AppResult<Vec<LogEntry>> {
    let mut stmt = store.conn().prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let raw_date: String = row.get(1)?;
        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(raw_date);

        Ok(LogEntry {
            id: row.get(0)?,
            date,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn print_log(store: &Store) -> AppResult<()> {
    let entries = load_log(store)?;
    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return Ok(());
    }

    let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Other(e.to_string()))?;

    let op_target = |e: &LogEntry| {
        if e.target.is_empty() {
            e.operation.clone()
        } else {
            format!("{} ({})", e.operation, e.target)
        }
    };

    let op_w = entries
        .iter()
        .map(|e| op_target(e).len())
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

    for entry in &entries {
        let color = color_for_operation(&entry.operation);
        let mut visible = op_target(entry);

        if visible.len() > MAX_OP_WIDTH {
            visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
            visible.push_str("...");
        }

        // only the operation word is coloured
        let colored = match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(visible.as_str()).to_string(),
        };

        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &colored).len()));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            entry.id,
            entry.date,
            colored,
            padding,
            entry.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
