//! User model

use serde::{Deserialize, Serialize};

/// User roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Teacher
    }
}

/// A signed-in user as handed to the rest of the application
///
/// Carries no secret fields; it is built from a credential record after the
/// password has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Display name
    pub name: String,
    pub role: UserRole,
}
