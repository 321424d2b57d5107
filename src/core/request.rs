use std::fmt;

/// Lifecycle of a user-triggered operation (login, draft, send).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Settle a pending request from an operation result.
    pub fn settle<T, E: fmt::Display>(&mut self, result: &Result<T, E>) {
        *self = match result {
            Ok(_) => RequestState::Succeeded,
            Err(e) => RequestState::Failed(e.to_string()),
        };
    }
}
