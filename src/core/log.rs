use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, CYAN, GREEN, MAGENTA, RESET, WHITE, YELLOW};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add_movie" => GREEN,
        "add_user" => CYAN,
        "watch" => YELLOW,
        "init" => MAGENTA,
        "vacuum" | "export" => BLUE,
        _ => WHITE,
    }
}

/// Truncate to `max` display columns, adding `...` when something was cut.
fn truncate_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max.saturating_sub(3) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

fn op_target(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = entries
            .iter()
            .map(|e| truncate_width(&op_target(e), MAX_OP_WIDTH))
            .collect();

        let op_w = labels.iter().map(|l| l.width()).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for (entry, label) in entries.iter().zip(labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            // only the operation word is coloured, padding uses visible width
            let padding = " ".repeat(op_w.saturating_sub(label.width()));
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!(
                    "{}{op}{RESET} {rest}",
                    color_for_operation(&entry.operation)
                ),
                None => format!("{}{label}{RESET}", color_for_operation(&entry.operation)),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
