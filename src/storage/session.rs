//! Session repository
//!
//! Loads and saves the session as JSON under a single key. Loading never
//! fails: a missing, unreadable or corrupt value yields a fresh session.

use tracing::{debug, warn};

use crate::error::VibepayResult;
use crate::models::Session;

use super::kv::KeyValueStore;

/// Key the session is stored under
pub const STORAGE_KEY: &str = "vibepay-chat-state";

/// Repository for session persistence
pub struct SessionRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionRepository<S> {
    /// Repository using the default key
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored session, falling back to a default one
    pub fn load(&self) -> Session {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored session, starting fresh");
                return Session::default();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read stored session, starting fresh");
                return Session::default();
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                debug!(
                    key = %self.key,
                    transactions = session.transactions.len(),
                    "session loaded"
                );
                session
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored session is corrupt, starting fresh");
                Session::default()
            }
        }
    }

    /// Persist the session
    pub fn save(&self, session: &Session) -> VibepayResult<()> {
        let json = serde_json::to_string(session)?;
        self.store.set(&self.key, &json)?;
        debug!(
            key = %self.key,
            transactions = session.transactions.len(),
            "session saved"
        );
        Ok(())
    }

    /// Replace the stored session with a fresh one and return it
    pub fn reset(&self) -> VibepayResult<Session> {
        let session = Session::default();
        self.save(&session)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VibepayError;
    use crate::models::{Category, Goal, Money, Transaction, TransactionType};
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn sample_session() -> Session {
        Session::default().with_transaction(Transaction::new(
            Money::from_cents(7500),
            TransactionType::Expense,
            Category::Food,
            "gastei com mercado",
        ))
    }

    #[test]
    fn test_missing_value_loads_default() {
        let repo = SessionRepository::new(MemoryStore::new());
        let session = repo.load();
        assert!(session.transactions.is_empty());
        assert_eq!(session.goals, Goal::default_set());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SessionRepository::new(FileStore::new(temp_dir.path().to_path_buf()));

        let session = sample_session();
        repo.save(&session).unwrap();
        assert_eq!(repo.load(), session);
    }

    #[test]
    fn test_corrupt_value_loads_default() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "{ this is not json").unwrap();
        let repo = SessionRepository::new(store);

        let session = repo.load();
        assert!(session.transactions.is_empty());
    }

    #[test]
    fn test_partial_value_fills_defaults() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, r#"{"transactions": []}"#).unwrap();
        let repo = SessionRepository::new(store);

        assert_eq!(repo.load().goals, Goal::default_set());
    }

    #[test]
    fn test_null_goals_keep_stored_transactions() {
        let mut value = serde_json::to_value(sample_session()).unwrap();
        value["goals"] = serde_json::Value::Null;

        let store = MemoryStore::new();
        store.set(STORAGE_KEY, &value.to_string()).unwrap();
        let repo = SessionRepository::new(store);

        let session = repo.load();
        assert_eq!(session.transactions.len(), 1);
        assert_eq!(session.transactions[0].category, Category::Food);
        assert_eq!(session.goals, Goal::default_set());
    }

    #[test]
    fn test_read_failure_loads_default() {
        struct BrokenStore;

        impl KeyValueStore for BrokenStore {
            fn get(&self, _key: &str) -> VibepayResult<Option<String>> {
                Err(VibepayError::Storage("unavailable".into()))
            }

            fn set(&self, _key: &str, _value: &str) -> VibepayResult<()> {
                Err(VibepayError::Storage("unavailable".into()))
            }
        }

        let repo = SessionRepository::new(BrokenStore);
        assert!(repo.load().transactions.is_empty());
        assert!(repo.save(&Session::default()).is_err());
    }

    #[test]
    fn test_reset_overwrites_stored_session() {
        let repo = SessionRepository::new(MemoryStore::new());
        repo.save(&sample_session()).unwrap();

        let fresh = repo.reset().unwrap();
        assert!(fresh.transactions.is_empty());
        assert!(repo.load().transactions.is_empty());
    }

    #[test]
    fn test_custom_key() {
        let repo = SessionRepository::with_key(MemoryStore::new(), "other-key");
        repo.save(&sample_session()).unwrap();
        assert!(repo.store().get(STORAGE_KEY).unwrap().is_none());
        assert!(repo.store().get("other-key").unwrap().is_some());
    }
}
