//! Credential store and the login check
//!
//! This is a placeholder store, not a security boundary: passwords are kept
//! and compared in plain text, with no lockout or rate limiting.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::models::{User, UserRole};

/// A login record, including its secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
}

impl Credential {
    /// The user this credential signs in as, without the password
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Lookup of login records by username
pub trait CredentialStore: Send + Sync {
    fn find(&self, username: &str) -> Option<Credential>;
}

/// A fixed list of credentials held in memory
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    entries: Vec<Credential>,
}

impl StaticCredentials {
    /// Build from a list; on a repeated username the first entry wins
    pub fn new(entries: Vec<Credential>) -> Self {
        let mut unique: Vec<Credential> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().any(|e| e.username == entry.username) {
                warn!("Ignoring duplicate credential for {}", entry.username);
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// The academy's default accounts
    pub fn builtin() -> Self {
        Self::new(vec![
            Credential {
                id: 1,
                username: "sogon".to_string(),
                password: "sogonsogon".to_string(),
                name: "관리자".to_string(),
                role: UserRole::Admin,
            },
            Credential {
                id: 2,
                username: "teacher1".to_string(),
                password: "1234".to_string(),
                name: "박선생".to_string(),
                role: UserRole::Teacher,
            },
        ])
    }
}

impl CredentialStore for StaticCredentials {
    fn find(&self, username: &str) -> Option<Credential> {
        self.entries.iter().find(|e| e.username == username).cloned()
    }
}

/// Check a username/password pair; both must match exactly
pub fn login(store: &dyn CredentialStore, username: &str, password: &str) -> Option<User> {
    let credential = store.find(username)?;
    let matches: bool = credential
        .password
        .as_bytes()
        .ct_eq(password.as_bytes())
        .into();

    if matches {
        debug!("Login succeeded for {}", username);
        Some(credential.to_user())
    } else {
        debug!("Login rejected for {}", username);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_admin_login() {
        let store = StaticCredentials::builtin();
        let user = login(&store, "sogon", "sogonsogon").unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.name, "관리자");

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "admin");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_rejected_logins() {
        let store = StaticCredentials::builtin();
        assert!(login(&store, "sogon", "wrong").is_none());
        assert!(login(&store, "nobody", "x").is_none());
        assert!(login(&store, "SOGON", "sogonsogon").is_none());
        assert!(login(&store, "sogon", "sogonsogon ").is_none());
    }

    #[test]
    fn test_injected_store() {
        let store = StaticCredentials::new(vec![
            Credential {
                id: 7,
                username: "kim".to_string(),
                password: "pw".to_string(),
                name: "김선생".to_string(),
                role: UserRole::Teacher,
            },
            Credential {
                id: 8,
                username: "kim".to_string(),
                password: "other".to_string(),
                name: "중복".to_string(),
                role: UserRole::Admin,
            },
        ]);
        assert_eq!(login(&store, "kim", "pw").map(|u| u.id), Some(7));
        assert!(login(&store, "kim", "other").is_none());
        assert!(login(&store, "sogon", "sogonsogon").is_none());
    }
}
