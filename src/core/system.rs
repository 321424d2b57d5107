//! Demo/live mode and setup-complete flags, and the rules linking them.

use crate::errors::AppResult;
use crate::models::room::Room;
use crate::models::user::UserRecord;
use crate::store::{DEMO_MODE, ROOMS, SETUP_COMPLETE, Store, USERS};

#[derive(Clone, Copy)]
pub struct SystemMode<'a> {
    store: &'a Store,
}

impl<'a> SystemMode<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Demo mode is the default for a store that never chose.
    pub fn is_demo_mode(&self) -> AppResult<bool> {
        Ok(self.store.get(DEMO_MODE)?.unwrap_or(true))
    }

    /// Persist the mode flag and realign the setup-complete flag.
    ///
    /// Callers must end the active session and reload afterwards; see
    /// `AppState::switch_mode`.
    pub fn set_demo_mode(&self, next: bool) -> AppResult<()> {
        self.store.set(DEMO_MODE, &next)?;

        if next {
            self.store.set(SETUP_COMPLETE, &true)?;
        } else if self.real_users()?.is_empty() {
            self.store.set(SETUP_COMPLETE, &false)?;
        }

        self.store.audit(
            "mode",
            if next { "demo" } else { "live" },
            "System mode changed",
        );
        Ok(())
    }

    pub fn is_setup_complete(&self) -> AppResult<bool> {
        if self.is_demo_mode()? {
            return Ok(true);
        }
        Ok(self.store.get(SETUP_COMPLETE)?.unwrap_or(false))
    }

    pub fn complete_setup(&self) -> AppResult<()> {
        self.store.set(SETUP_COMPLETE, &true)
    }

    /// True only in live mode before the bootstrap has run.
    pub fn needs_setup(&self) -> AppResult<bool> {
        Ok(!self.is_demo_mode()? && !self.is_setup_complete()?)
    }

    pub fn real_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.store.get(USERS)?.unwrap_or_default())
    }

    /// Explicit reset: drops every live account and re-arms the setup wizard.
    /// Rooms and the mode flag are kept.
    pub fn reset_real_users(&self) -> AppResult<()> {
        self.store.remove(USERS)?;
        self.store.set(SETUP_COMPLETE, &false)?;
        self.store.audit("reset", "users", "All live accounts removed");
        Ok(())
    }

    pub fn real_rooms(&self) -> AppResult<Vec<Room>> {
        Ok(self.store.get(ROOMS)?.unwrap_or_default())
    }

    /// Replace the whole live room collection.
    pub fn save_real_rooms(&self, rooms: &[Room]) -> AppResult<()> {
        self.store.set(ROOMS, &rooms.to_vec())
    }
}
