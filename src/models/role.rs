use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Superuser,
    Owner,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superuser => "SUPERUSER",
            Role::Owner => "OWNER",
            Role::Manager => "MANAGER",
        }
    }

    /// Roles allowed to add or remove rooms.
    pub fn can_manage_rooms(&self) -> bool {
        matches!(self, Role::Superuser | Role::Owner | Role::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
