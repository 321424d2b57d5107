//! Composition root: decides which surface is active and owns the session.

use std::time::Duration;

use crate::core::session::{AuthState, SessionManager};
use crate::core::setup::SetupWizard;
use crate::core::system::SystemMode;
use crate::errors::AppResult;
use crate::models::user::Session;
use crate::store::Store;

/// What the authorized shell needs from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellContext {
    pub session: Session,
    pub is_demo: bool,
}

impl ShellContext {
    pub fn can_manage_rooms(&self) -> bool {
        self.session.can_manage_rooms()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Setup,
    Login,
    Authorized(ShellContext),
}

/// Pure derivation of the active view.
pub fn route(loading: bool, needs_setup: bool, session: Option<&Session>, is_demo: bool) -> View {
    if loading {
        return View::Loading;
    }
    if needs_setup {
        return View::Setup;
    }
    match session {
        None => View::Login,
        Some(s) => View::Authorized(ShellContext {
            session: s.clone(),
            is_demo,
        }),
    }
}

pub struct AppState<'a> {
    store: &'a Store,
    sessions: SessionManager<'a>,
    auth: AuthState,
    is_demo: bool,
    needs_setup: bool,
}

impl<'a> AppState<'a> {
    /// Read mode, setup and session state from the store.
    pub fn boot(store: &'a Store, login_latency: Duration) -> AppResult<Self> {
        let sessions = SessionManager::new(store).with_latency(login_latency);
        let mut state = Self {
            store,
            sessions,
            auth: AuthState::loading(),
            is_demo: true,
            needs_setup: false,
        };
        state.reload()?;
        Ok(state)
    }

    fn reload(&mut self) -> AppResult<()> {
        self.auth = AuthState::loading();
        self.auth.restore(&self.sessions)?;
        self.refresh_flags()
    }

    fn refresh_flags(&mut self) -> AppResult<()> {
        let mode = SystemMode::new(self.store);
        self.is_demo = mode.is_demo_mode()?;
        self.needs_setup = mode.needs_setup()?;
        Ok(())
    }

    pub fn view(&self) -> View {
        route(
            self.auth.loading,
            self.needs_setup,
            self.auth.session.as_ref(),
            self.is_demo,
        )
    }

    pub fn is_demo(&self) -> bool {
        self.is_demo
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn sessions(&self) -> SessionManager<'a> {
        self.sessions
    }

    pub fn sign_in(&mut self, email: &str, secret: &str) -> AppResult<Session> {
        let session = self.auth.login(&self.sessions, email, secret)?;
        self.refresh_flags()?;
        Ok(session)
    }

    pub fn sign_out(&mut self) -> AppResult<()> {
        self.auth.logout(&self.sessions)
    }

    /// Change mode, end the session and rebuild all derived state.
    pub fn switch_mode(&mut self, demo: bool) -> AppResult<()> {
        SystemMode::new(self.store).set_demo_mode(demo)?;
        self.auth.logout(&self.sessions)?;
        self.reload()
    }

    pub fn setup_wizard(&self, room_feature: &str) -> AppResult<SetupWizard<'a>> {
        SetupWizard::start(self.store, self.sessions, room_feature)
    }

    /// Pick up whatever the setup wizard persisted.
    pub fn finish_setup(&mut self) -> AppResult<()> {
        self.reload()
    }
}
