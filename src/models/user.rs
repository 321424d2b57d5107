//! Account records and the session view derived from them.

use super::role::Role;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A live-mode account, persisted with its plaintext secret.
///
/// Plaintext storage is only acceptable because the store never leaves the
/// local machine; it mirrors the sample deployment this tool targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub credential_secret: String,
}

impl UserRecord {
    /// Build a record with a freshly generated id of the form `<role>_<millis>`.
    pub fn new(role: Role, display_name: &str, email: &str, secret: &str) -> Self {
        Self {
            id: format!(
                "{}_{}",
                role.as_str().to_lowercase(),
                Utc::now().timestamp_millis()
            ),
            email: email.to_string(),
            display_name: display_name.to_string(),
            role,
            credential_secret: secret.to_string(),
        }
    }

    pub fn to_session(&self) -> Session {
        Session {
            user_id: self.id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            role: Some(self.role),
        }
    }
}

/// The authenticated actor: a [`UserRecord`] without the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    /// Snapshots written by older builds may lack a role; such sessions get read-only access.
    #[serde(default)]
    pub role: Option<Role>,
}

impl Session {
    pub fn can_manage_rooms(&self) -> bool {
        self.role.is_some_and(|r| r.can_manage_rooms())
    }
}
