use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use uuid::Uuid;

use super::session::LeadSession;

/// Live form sessions, one per page instance, keyed by the id the page
/// carries in its links and hidden form field.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Arc<LeadSession>>>,
    confirmation: Duration,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(confirmation: Duration, ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            confirmation,
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Arc<LeadSession>>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn open(&self) -> Arc<LeadSession> {
        let session = Arc::new(LeadSession::new(self.confirmation));
        self.lock().insert(session.id(), Arc::clone(&session));
        tracing::debug!(session = %session.id(), "opened form session");
        session
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<LeadSession>> {
        self.lock().get(&id).cloned()
    }

    /// Reuses a known session, otherwise starts a fresh one. Stale or forged
    /// ids never resurrect anything.
    pub fn get_or_open(&self, id: Option<Uuid>) -> Arc<LeadSession> {
        id.and_then(|id| self.get(id)).unwrap_or_else(|| self.open())
    }

    pub fn close(&self, id: Uuid) -> bool {
        let removed = self.lock().remove(&id);
        match removed {
            Some(session) => {
                session.teardown();
                tracing::debug!(session = %id, "closed form session");
                true
            }
            None => false,
        }
    }

    /// Tears down sessions idle for longer than the ttl.
    pub fn prune_idle(&self) -> usize {
        let expired: Vec<Arc<LeadSession>> = {
            let mut sessions = self.lock();
            let ids: Vec<Uuid> = sessions
                .iter()
                .filter(|(_, s)| s.idle_for() > self.ttl && !s.state().is_submitting())
                .map(|(id, _)| *id)
                .collect();
            ids.iter().filter_map(|id| sessions.remove(id)).collect()
        };

        for session in &expired {
            session.teardown();
        }
        if !expired.is_empty() {
            tracing::info!(count = expired.len(), "pruned idle form sessions");
        }
        expired.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
