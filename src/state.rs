use crate::config::AppConfig;
use crate::models::Dentist;
use crate::services::relay::LeadRelay;
use crate::services::session_store::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    pub relay: Box<dyn LeadRelay>,
    pub sessions: SessionStore,
    pub dentists: Vec<Dentist>,
}

impl AppState {
    pub fn new(config: AppConfig, relay: Box<dyn LeadRelay>, dentists: Vec<Dentist>) -> Self {
        let sessions = SessionStore::new(config.confirmation, config.session_ttl);
        Self {
            config,
            relay,
            sessions,
            dentists,
        }
    }
}
