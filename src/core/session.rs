//! Session lifecycle: login against stored accounts, logout, restore.

use std::thread;
use std::time::Duration;

use crate::core::request::RequestState;
use crate::core::system::SystemMode;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::user::{Session, UserRecord};
use crate::store::{SESSION, Store, USERS};

pub const DEMO_USER_ID: &str = "user_123";
pub const DEMO_EMAIL: &str = "admin@staysync.com";
pub const DEMO_DISPLAY_NAME: &str = "Demo Admin";

/// The fixed identity handed out by demo-mode login.
///
/// Demo login accepts any credentials. That is only acceptable for a sample
/// deployment and must never guard real data.
pub fn demo_session() -> Session {
    Session {
        user_id: DEMO_USER_ID.to_string(),
        email: DEMO_EMAIL.to_string(),
        display_name: DEMO_DISPLAY_NAME.to_string(),
        role: Some(Role::Superuser),
    }
}

#[derive(Clone, Copy)]
pub struct SessionManager<'a> {
    store: &'a Store,
    latency: Duration,
}

impl<'a> SessionManager<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            latency: Duration::ZERO,
        }
    }

    /// Artificial delay applied to every login attempt.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }

    pub fn login(&self, email: &str, secret: &str) -> AppResult<Session> {
        self.simulate_latency();

        let mode = SystemMode::new(self.store);
        let session = if mode.is_demo_mode()? {
            demo_session()
        } else {
            mode.real_users()?
                .iter()
                .find(|u| u.email == email && u.credential_secret == secret)
                .map(UserRecord::to_session)
                .ok_or(AppError::InvalidCredentials)?
        };

        self.store.set(SESSION, &session)?;
        self.store.audit("login", &session.email, "Session started");
        Ok(session)
    }

    pub fn logout(&self) -> AppResult<()> {
        self.store.remove(SESSION)?;
        self.store.audit("logout", "", "Session cleared");
        Ok(())
    }

    /// Restore the persisted session.
    ///
    /// In live mode a session whose email is no longer among the stored
    /// accounts is cleared and reported as absent.
    pub fn current_session(&self) -> AppResult<Option<Session>> {
        let Some(session) = self.store.get(SESSION)? else {
            return Ok(None);
        };

        let mode = SystemMode::new(self.store);
        if !mode.is_demo_mode()? && !mode.real_users()?.iter().any(|u| u.email == session.email)
        {
            self.store.remove(SESSION)?;
            self.store.audit("logout", &session.email, "Stale session discarded");
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Persist an account created outside the login path (setup wizard).
    ///
    /// Replaces any existing account with the same role, so re-running a
    /// setup step overwrites instead of duplicating. An email already held by
    /// a different role is rejected.
    pub fn register_user(&self, record: UserRecord) -> AppResult<()> {
        let mut users = self.store.get(USERS)?.unwrap_or_default();

        if let Some(other) = users
            .iter()
            .find(|u| u.email == record.email && u.role != record.role)
        {
            return Err(AppError::Validation(format!(
                "email {} is already used by the {} account",
                record.email, other.role
            )));
        }

        users.retain(|u| u.role != record.role);
        let (role, email) = (record.role, record.email.clone());
        users.push(record);
        self.store.set(USERS, &users)?;
        self.store
            .audit("register", role.as_str(), &format!("Account {} saved", email));
        Ok(())
    }
}

/// Explicit session container owned by the composition root.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
    pub login: RequestState,
}

impl AuthState {
    /// State before the persisted session has been read.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn restore(&mut self, sessions: &SessionManager<'_>) -> AppResult<()> {
        self.session = sessions.current_session()?;
        self.loading = false;
        Ok(())
    }

    pub fn login(
        &mut self,
        sessions: &SessionManager<'_>,
        email: &str,
        secret: &str,
    ) -> AppResult<Session> {
        self.login = RequestState::Pending;
        let result = sessions.login(email, secret);
        self.login.settle(&result);
        let session = result?;
        self.session = Some(session.clone());
        Ok(session)
    }

    pub fn logout(&mut self, sessions: &SessionManager<'_>) -> AppResult<()> {
        sessions.logout()?;
        self.session = None;
        self.login = RequestState::Idle;
        Ok(())
    }
}
