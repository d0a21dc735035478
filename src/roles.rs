use serde::{Deserialize, Serialize};

/// Privilege level attached to an account.
///
/// Levels are totally ordered: an account authorizes an operation when
/// its role is at least the required one. Accounts with no assignment
/// hold `Role::None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(u8)]
pub enum Role {
    /// No administrative privilege (the default for unset accounts)
    #[default]
    None = 0,

    /// Administrative privilege: may mint and edit denylists
    Admin = 1,
}

impl Role {
    /// Map a raw wire-level privilege integer onto a role.
    ///
    /// Level 0 is no privilege; any non-zero level is administrative.
    pub fn from_level(level: u8) -> Self {
        if level == 0 {
            Role::None
        } else {
            Role::Admin
        }
    }

    /// The raw privilege level
    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// True if this role grants administrative privilege
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
