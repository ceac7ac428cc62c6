//! # Session store
//!
//! [`SessionStore`] owns the tab's authenticated identity and bearer token. It is
//! created once with [`SessionStore::hydrate`], which restores the record saved
//! under the configured durable key, and torn down with [`SessionStore::logout`].
//! Clones share state, so the route guard, the API client and the UI all observe
//! the same session.
//!
//! ## Durable record
//!
//! Exactly one key is written (default `foodshare.session`). Its value is the
//! JSON-serialised [`Session`]: the bearer token plus the identity returned at
//! login, which lets a reload restore the session without a round trip.
//!
//! ## Expiry
//!
//! Tokens are JWTs. The unverified `exp` claim is read from the payload; once it
//! has passed the session reads as absent and the durable key is purged. A token
//! without a readable `exp` never expires client-side; the backend answers 401
//! and the API client clears the store.

use std::sync::{Arc, RwLock};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::{KeyValueStore, StorageConfig};

use crate::models::{Role, UserInfo};

/// An authenticated identity and its bearer credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserInfo,
    pub token: String,
}

#[derive(Deserialize)]
struct Claims {
    #[serde(default)]
    exp: Option<i64>,
}

impl Session {
    pub fn new(user: UserInfo, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.user.organization_name.as_deref()
    }

    /// Expiry read from the token's `exp` claim, if it has one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let payload = self.token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        let claims: Claims = serde_json::from_slice(&bytes).ok()?;
        DateTime::from_timestamp(claims.exp?, 0)
    }

    /// A blank or expired credential makes the session unusable.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        if self.token.trim().is_empty() {
            return false;
        }
        match self.expires_at() {
            Some(exp) => exp > now,
            None => true,
        }
    }
}

/// Single-instance, shareable owner of the current session.
#[derive(Clone)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    key: String,
    current: Arc<RwLock<Option<Session>>>,
}

impl<S: KeyValueStore> std::fmt::Debug for SessionStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .field("authenticated", &self.read().is_some())
            .finish()
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore the session persisted in `storage`, if any.
    ///
    /// Unreadable or corrupt records are discarded.
    pub fn hydrate(storage: S, config: &StorageConfig) -> Self {
        let key = config.session_key.clone();
        let restored = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!("Discarding corrupt session record: {}", e);
                    let _ = storage.remove(&key);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to read session storage: {}", e);
                None
            }
        };

        let store = Self {
            storage,
            key,
            current: Arc::new(RwLock::new(restored)),
        };
        // Drop an already-expired record right away.
        let _ = store.current();
        store
    }

    fn read(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn replace(&self, session: Option<Session>) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = session;
    }

    /// The active session, or `None` when logged out or the token has expired.
    pub fn current(&self) -> Option<Session> {
        self.current_at(Utc::now())
    }

    pub fn current_at(&self, now: DateTime<Utc>) -> Option<Session> {
        let session = self.read()?;
        if session.is_valid_at(now) {
            Some(session)
        } else {
            tracing::info!("Session for user {} expired", session.user_id());
            self.logout();
            None
        }
    }

    /// Bearer token of the active session.
    pub fn token(&self) -> Option<String> {
        self.current().map(|s| s.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Make `session` the active session and persist it.
    ///
    /// A storage failure is logged; the session still holds for this tab.
    pub fn install(&self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(&self.key, &raw) {
                    tracing::error!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialise session: {}", e),
        }
        tracing::info!(
            "Signed in as user {} ({})",
            session.user_id(),
            session.role().as_str()
        );
        self.replace(Some(session));
    }

    /// Forget the session and remove the durable record.
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::error!("Failed to clear session storage: {}", e);
        }
        if self.read().is_some() {
            tracing::info!("Signed out");
        }
        self.replace(None);
    }

    /// Log out only if the active session still holds `token`.
    ///
    /// Returns `false` when a different session (or none) is active, so a
    /// rejection of an old credential cannot end a newer session.
    pub fn revoke(&self, token: &str) -> bool {
        let held = self.read().is_some_and(|s| s.token == token);
        if held {
            self.logout();
        }
        held
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use store::MemoryStore;

    /// Unsigned JWT-shaped token carrying `exp`.
    pub(crate) fn token_expiring_at(exp: DateTime<Utc>) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"5","exp":{}}}"#, exp.timestamp()));
        format!("{header}.{payload}.signature")
    }

    pub(crate) fn ngo_user() -> UserInfo {
        UserInfo {
            id: 5,
            username: "kitchen".to_string(),
            email: "kitchen@example.org".to_string(),
            role: Role::Ngo,
            organization_name: Some("Community Kitchen".to_string()),
        }
    }

    fn fresh_store(storage: &MemoryStore) -> SessionStore<MemoryStore> {
        SessionStore::hydrate(storage.clone(), &StorageConfig::default())
    }

    #[test]
    fn test_starts_logged_out() {
        let storage = MemoryStore::new();
        let sessions = fresh_store(&storage);
        assert!(sessions.current().is_none());
        assert!(sessions.token().is_none());
    }

    #[test]
    fn test_reload_restores_identity() {
        let storage = MemoryStore::new();
        let token = token_expiring_at(Utc::now() + Duration::hours(1));
        let sessions = fresh_store(&storage);
        sessions.install(Session::new(ngo_user(), token.clone()));

        // Simulated reload: a new store over the same durable storage
        let reloaded = fresh_store(&storage);
        let session = reloaded.current().unwrap();
        assert_eq!(session.user, ngo_user());
        assert_eq!(session.token, token);
        assert_eq!(session.organization_name(), Some("Community Kitchen"));
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let storage = MemoryStore::new();
        let sessions = fresh_store(&storage);
        sessions.install(Session::new(ngo_user(), "opaque-token"));
        assert!(storage.get("foodshare.session").unwrap().is_some());

        sessions.logout();
        assert!(sessions.current().is_none());
        assert!(storage.get("foodshare.session").unwrap().is_none());
        assert!(fresh_store(&storage).current().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let storage = MemoryStore::new();
        let sessions = fresh_store(&storage);
        let guard_view = sessions.clone();
        sessions.install(Session::new(ngo_user(), "opaque-token"));
        assert!(guard_view.is_authenticated());
        guard_view.logout();
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_revoke_ignores_other_token() {
        let storage = MemoryStore::new();
        let sessions = fresh_store(&storage);
        sessions.install(Session::new(ngo_user(), "second-token"));

        assert!(!sessions.revoke("first-token"));
        assert_eq!(sessions.token().as_deref(), Some("second-token"));
        assert!(storage.get("foodshare.session").unwrap().is_some());

        assert!(sessions.revoke("second-token"));
        assert!(sessions.current().is_none());
        assert!(storage.get("foodshare.session").unwrap().is_none());
    }

    #[test]
    fn test_expired_token_reads_as_absent() {
        let storage = MemoryStore::new();
        let sessions = fresh_store(&storage);
        let exp = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        sessions.install(Session::new(ngo_user(), token_expiring_at(exp)));

        assert!(sessions.current_at(exp - Duration::seconds(1)).is_some());
        assert!(sessions.current_at(exp).is_none());
        // Expiry purges the durable record too
        assert!(storage.get("foodshare.session").unwrap().is_none());
    }

    #[test]
    fn test_expired_record_dropped_on_hydrate() {
        let storage = MemoryStore::new();
        let stale = Session::new(ngo_user(), token_expiring_at(Utc::now() - Duration::minutes(5)));
        storage
            .set("foodshare.session", &serde_json::to_string(&stale).unwrap())
            .unwrap();

        let sessions = fresh_store(&storage);
        assert!(sessions.current().is_none());
        assert!(storage.get("foodshare.session").unwrap().is_none());
    }

    #[test]
    fn test_blank_token_is_absent() {
        let session = Session::new(ngo_user(), "  ");
        assert!(!session.is_valid_at(Utc::now()));
    }

    #[test]
    fn test_opaque_token_has_no_expiry() {
        let session = Session::new(ngo_user(), "not-a-jwt");
        assert!(session.expires_at().is_none());
        assert!(session.is_valid_at(Utc::now()));
    }

    #[test]
    fn test_corrupt_record_discarded() {
        let storage = MemoryStore::new();
        storage.set("foodshare.session", "{not json").unwrap();
        let sessions = fresh_store(&storage);
        assert!(sessions.current().is_none());
        assert!(storage.get("foodshare.session").unwrap().is_none());
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStore::new();
        let config = StorageConfig {
            session_key: "other.key".to_string(),
        };
        let sessions = SessionStore::hydrate(storage.clone(), &config);
        sessions.install(Session::new(ngo_user(), "t"));
        assert!(storage.get("other.key").unwrap().is_some());
        assert!(storage.get("foodshare.session").unwrap().is_none());
    }
}
