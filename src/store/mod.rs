//! Persistent key/value store.
//!
//! One SQLite row per named slot, each value serialized as JSON. Callers never
//! touch raw keys: every logical slot is a typed [`Slot`] constant, so the key
//! and the value shape travel together.

use std::marker::PhantomData;

use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::db::initialize::init_db;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::room::Room;
use crate::models::user::{Session, UserRecord};

/// A named slot holding a value of type `T`.
pub struct Slot<T> {
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> Slot<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

pub const DEMO_MODE: Slot<bool> = Slot::new("staysync_is_demo");
pub const SETUP_COMPLETE: Slot<bool> = Slot::new("staysync_setup_complete");
pub const USERS: Slot<Vec<UserRecord>> = Slot::new("staysync_real_users");
pub const ROOMS: Slot<Vec<Room>> = Slot::new("staysync_real_rooms");
pub const SESSION: Slot<Session> = Slot::new("staysync_user");

pub struct Store {
    pool: DbPool,
}

impl Store {
    /// Open (or create) the store at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Store backed by a private in-memory database.
    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Read a slot.
    ///
    /// A value that no longer deserializes is deleted and reported as absent;
    /// the reset is only recorded in the internal log.
    pub fn get<T: DeserializeOwned>(&self, slot: Slot<T>) -> AppResult<Option<T>> {
        let raw: Option<String> = self
            .conn()
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                [slot.key()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                self.remove(slot)?;
                ttlog_soft(
                    self.conn(),
                    "store_reset",
                    slot.key(),
                    &format!("Discarded unreadable value: {}", e),
                );
                Ok(None)
            }
        }
    }

    pub fn set<T: Serialize>(&self, slot: Slot<T>, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.conn().execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![slot.key(), json],
        )?;
        Ok(())
    }

    pub fn remove<T>(&self, slot: Slot<T>) -> AppResult<()> {
        self.conn()
            .execute("DELETE FROM slots WHERE key = ?1", [slot.key()])?;
        Ok(())
    }

    /// Audit helper bound to this store's connection.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_soft(self.conn(), operation, target, message);
    }
}
