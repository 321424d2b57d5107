use crate::db::log;
use crate::errors::AppResult;
use crate::store::{ROOMS, Store, USERS};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(store: &Store, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SLOTS
    //
    let conn = store.conn();
    let slots: i64 = conn.query_row("SELECT COUNT(*) FROM slots", [], |row| row.get(0))?;
    println!("{}• Slots in use:{} {}{}{}", CYAN, RESET, GREEN, slots, RESET);

    //
    // 3) LIVE COLLECTIONS
    //
    let users = store.get(USERS)?.map(|u| u.len()).unwrap_or(0);
    let rooms = store.get(ROOMS)?.map(|r| r.len()).unwrap_or(0);
    println!("{}• Live users:{} {}", CYAN, RESET, users);
    println!("{}• Live rooms:{} {}", CYAN, RESET, rooms);
    println!("{}• Log entries:{} {}", CYAN, RESET, log::count(conn)?);

    //
    // 4) LAST WRITE
    //
    let last: Option<String> = conn
        .query_row(
            "SELECT updated_at FROM slots ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last write:{} {}", CYAN, RESET, fmt_last);

    println!();
    Ok(())
}
