use std::sync::Arc;

use crate::config::TeamConfig;
use crate::storage::PlayStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<tokio::sync::RwLock<PlayStore>>,
    pub team: Arc<TeamConfig>,
}

impl AppState {
    pub fn new(store: PlayStore, team: TeamConfig) -> Self {
        Self {
            store: Arc::new(tokio::sync::RwLock::new(store)),
            team: Arc::new(team),
        }
    }
}
