//! Generic session registry (`SPEC_FULL.md` §5 suspension points /
//! §4.7-§4.8 lifecycles), grounded on `crates/server/src/session.rs`'s
//! `SessionManager`: an `RwLock<HashMap<..>>` keyed by session id, a
//! capacity check on insert, plain insert/get/remove/count methods. The
//! teacher wraps each session body in `Arc<Session>`; here each body is
//! wrapped in `Arc<tokio::sync::Mutex<T>>` instead, since callers mutate the
//! session in place across `await` points (the async collaborator calls
//! that `SPEC_FULL.md` §5 requires run without holding this lock, at the
//! server layer, which checks the session out, awaits, then checks it back
//! in under the mutex for the brief synchronous update).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use interview_core::{CoreError, Result};

pub struct SessionRegistry<T> {
    sessions: RwLock<HashMap<String, Arc<Mutex<T>>>>,
    max_sessions: usize,
}

impl<T> SessionRegistry<T> {
    pub fn new(max_sessions: usize) -> Self {
        Self { sessions: RwLock::new(HashMap::new()), max_sessions }
    }

    /// Inserts a freshly-created session. Fails with `InternalError` if the
    /// registry is at capacity (the teacher's `SessionManager::create`
    /// returns a dedicated `max sessions reached` error; this workspace has
    /// no such variant, so capacity exhaustion is reported as an internal
    /// error rather than inventing a new `CoreError` case for it).
    pub fn insert(&self, id: String, value: T) -> Result<Arc<Mutex<T>>> {
        let mut sessions = self.sessions.write();
        if sessions.len() >= self.max_sessions {
            return Err(CoreError::InternalError(format!(
                "session registry at capacity ({} sessions)",
                self.max_sessions
            )));
        }
        let handle = Arc::new(Mutex::new(value));
        sessions.insert(id, handle.clone());
        Ok(handle)
    }

    pub fn get(&self, id: &str) -> Result<Arc<Mutex<T>>> {
        self.sessions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })
    }

    pub fn remove(&self, id: &str) -> Option<Arc<Mutex<T>>> {
        self.sessions.write().remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.read().contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let registry: SessionRegistry<u32> = SessionRegistry::new(10);
        registry.insert("a".into(), 7).unwrap();
        let handle = registry.get("a").unwrap();
        assert_eq!(*handle.lock().await, 7);
    }

    #[test]
    fn missing_session_is_not_found() {
        let registry: SessionRegistry<u32> = SessionRegistry::new(10);
        assert!(matches!(registry.get("nope"), Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn capacity_is_enforced() {
        let registry: SessionRegistry<u32> = SessionRegistry::new(1);
        registry.insert("a".into(), 1).unwrap();
        assert!(registry.insert("b".into(), 2).is_err());
    }

    #[test]
    fn remove_drops_the_session() {
        let registry: SessionRegistry<u32> = SessionRegistry::new(10);
        registry.insert("a".into(), 1).unwrap();
        assert!(registry.remove("a").is_some());
        assert!(!registry.contains("a"));
        assert_eq!(registry.count(), 0);
    }
}
