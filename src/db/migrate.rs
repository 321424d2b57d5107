use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Current schema version, stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 2;

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `slots` table exists.
fn slots_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='slots'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `slots` table has an `updated_at` column.
fn slots_has_updated_at(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('slots')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the key/value `slots` table (one JSON value per named slot).
fn create_slots_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

/// Version 1 stores had no `updated_at` column.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    if slots_has_updated_at(conn)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        ALTER TABLE slots ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';
        UPDATE slots SET updated_at = datetime('now') WHERE updated_at = '';
        "#,
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', 'v2', 'Added updated_at to slots')",
        [],
    )?;

    success("Migration applied: v2 → added 'updated_at' to slots table");
    Ok(())
}

fn user_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

/// Public entry point: run all pending migrations.
///
/// Called every time a store is opened, so every step is idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !slots_table_exists(conn)? {
        create_slots_table(conn)?;
    } else {
        migrate_add_updated_at(conn)?;
    }

    if user_version(conn)? < SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION))?;
    }

    Ok(())
}
