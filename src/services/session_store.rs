//! In-memory store of trip sessions, keyed by UUID. Shared across handlers
//! as `web::Data`; each request locks, works on its context, and releases.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::models::trip_context::TripContext;

#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, TripContext>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .lock()
            .unwrap()
            .insert(id, TripContext::default());
        id
    }

    /// Run a closure against a session's context. `None` if the session does
    /// not exist.
    pub fn with_context<T>(&self, id: Uuid, f: impl FnOnce(&mut TripContext) -> T) -> Option<T> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.get_mut(&id).map(f)
    }

    /// Clone a session's context out of the store, for operations that must
    /// not hold the lock across an await point.
    pub fn snapshot(&self, id: Uuid) -> Option<TripContext> {
        self.sessions.lock().unwrap().get(&id).cloned()
    }
}
