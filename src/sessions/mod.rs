use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rand::{Rng, distributions::Alphanumeric};
use uuid::Uuid;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "pb_session";

const TOKEN_LEN: usize = 32;

/// In-process map from opaque session token to user id.
///
/// Tokens live for the lifetime of the process; logout removes them. There is
/// no expiry beyond that, matching the single-user-session model.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Uuid>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token for a logged-in user.
    pub fn issue(&self, user_id: Uuid) -> String {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone(), user_id);

        token
    }

    /// Resolve a token to its user id, if the session is still live.
    pub fn resolve(&self, token: &str) -> Option<Uuid> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(token)
            .copied()
    }

    /// Drop a session. Unknown tokens are a no-op.
    pub fn revoke(&self, token: &str) {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_resolve() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();

        let token = store.issue(user_id);

        assert_eq!(token.len(), TOKEN_LEN);
        assert_eq!(store.resolve(&token), Some(user_id));
    }

    #[test]
    fn test_revoke_ends_session() {
        let store = SessionStore::new();
        let token = store.issue(Uuid::new_v4());

        store.revoke(&token);

        assert_eq!(store.resolve(&token), None);
    }

    #[test]
    fn test_unknown_token_does_not_resolve() {
        let store = SessionStore::new();
        assert_eq!(store.resolve("no-such-token"), None);
    }

    #[test]
    fn test_logins_get_distinct_tokens() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();

        let first = store.issue(user_id);
        let second = store.issue(user_id);

        assert_ne!(first, second);
        // Both sessions stay live until revoked
        assert_eq!(store.resolve(&first), Some(user_id));
        assert_eq!(store.resolve(&second), Some(user_id));
    }
}
