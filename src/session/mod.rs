//! Local session state
//!
//! A toy authentication layer: a key/value store holding an opaque token
//! and the signed-in user's record as JSON, under the same two keys the web
//! client uses for local storage. There is no token validation and no
//! security guarantee; this exists so the navigation layer can ask "is
//! someone signed in" and get a consistent answer.

use crate::error::{LearnaultError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Storage key for the opaque session token
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Storage key for the signed-in user's JSON record
pub const USER_DATA_KEY: &str = "user_data";

const DEFAULT_ROLE: &str = "student";

/// The signed-in user, as the session layer sees them.
///
/// Distinct from the catalog's `User` fixture records: this is whatever the
/// login flow fabricated, not a reference row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// In-memory key/value session store.
pub struct SessionStore {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> SessionStore {
        SessionStore {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Sign in with email and password.
    ///
    /// No real credential check happens: any non-empty pair is accepted, a
    /// fresh token is minted, and a user record is fabricated with the name
    /// taken from the email's local part.
    pub fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        if email.is_empty() || password.is_empty() {
            return Err(LearnaultError::Session(
                "Email and password are required".to_string(),
            ));
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = AuthUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name,
            role: DEFAULT_ROLE.to_string(),
        };
        let user_json = serde_json::to_string(&user)?;

        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on session store - this should never happen");
        inner.insert(
            String::from(AUTH_TOKEN_KEY),
            Uuid::new_v4().to_string(),
        );
        inner.insert(String::from(USER_DATA_KEY), user_json);
        Ok(user)
    }

    /// Clear the session. Idempotent.
    pub fn logout(&self) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on session store - this should never happen");
        inner.remove(AUTH_TOKEN_KEY);
        inner.remove(USER_DATA_KEY);
    }

    /// The signed-in user, if a token is present and the stored record
    /// parses. A corrupt record reads as signed-out rather than an error.
    pub fn current_user(&self) -> Option<AuthUser> {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on session store - this should never happen");
        inner.get(AUTH_TOKEN_KEY)?;
        let user_json = inner.get(USER_DATA_KEY)?;
        match serde_json::from_str(user_json) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Discarding unreadable session user record: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_fabricates_user_from_email() {
        let store = SessionStore::new();
        let user = store.login("alice@example.com", "hunter2").unwrap();
        assert_eq!(user.name, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, DEFAULT_ROLE);
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_login_rejects_empty_credentials() {
        let store = SessionStore::new();
        assert!(store.login("", "hunter2").is_err());
        assert!(store.login("alice@example.com", "").is_err());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session() {
        let store = SessionStore::new();
        store.login("alice@example.com", "hunter2").unwrap();
        store.logout();
        assert!(store.current_user().is_none());
        assert!(!store.is_authenticated());

        // Logging out twice is fine
        store.logout();
    }

    #[test]
    fn test_current_user_round_trips_through_json() {
        let store = SessionStore::new();
        let logged_in = store.login("bob@example.com", "pw").unwrap();
        let current = store.current_user().unwrap();
        assert_eq!(logged_in, current);
    }
}
