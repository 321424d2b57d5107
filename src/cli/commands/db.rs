use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{SCHEMA_VERSION, run_pending_migrations};
use crate::db::stats;
use crate::errors::AppResult;
use crate::store::{DEMO_MODE, ROOMS, SESSION, SETUP_COMPLETE, Store, USERS};
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

/// Read every known slot once. Unreadable values are reset by the store;
/// returns how many were present before and after.
fn check_slots(store: &Store) -> AppResult<(usize, usize)> {
    let count = |store: &Store| -> AppResult<usize> {
        Ok(store
            .conn()
            .query_row("SELECT COUNT(*) FROM slots", [], |row| row.get::<_, i64>(0))?
            as usize)
    };

    let before = count(store)?;
    store.get(DEMO_MODE)?;
    store.get(SETUP_COMPLETE)?;
    store.get(USERS)?;
    store.get(ROOMS)?;
    store.get(SESSION)?;
    Ok((before, count(store)?))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    // opening the store already applies migrations
    let store = open_store(cfg)?;

    if *migrate {
        println!("{}▶ Running migrations…{}", CYAN, RESET);
        run_pending_migrations(store.conn())?;
        println!(
            "{}✔ Store is at schema version {}.{}\n",
            GREEN, SCHEMA_VERSION, RESET
        );
    }

    if *info {
        stats::print_db_info(&store, &cfg.database)?;
    }

    if *check {
        println!("{}▶ Running integrity check…{}", CYAN, RESET);

        let integrity: String = store
            .conn()
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            println!("{}✔ SQLite integrity check passed.{}", GREEN, RESET);
        } else {
            println!("{}✘ SQLite integrity check failed:{} {}", RED, RESET, integrity);
        }

        let (before, after) = check_slots(&store)?;
        if before == after {
            println!("{}✔ All {} slots are readable.{}\n", GREEN, after, RESET);
        } else {
            println!(
                "{}⚠ {} unreadable slot(s) were reset; see `staysync log --print`.{}\n",
                YELLOW,
                before - after,
                RESET
            );
        }
    }

    if *vacuum {
        println!("{}▶ Running VACUUM…{}", CYAN, RESET);
        store.conn().execute_batch("VACUUM;")?;
        println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    }

    Ok(())
}
