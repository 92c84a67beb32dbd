use axum::extract::FromRef;

use crate::store::SongStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type SharedSongStore = Arc<dyn SongStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub store: SharedSongStore,
}

impl FromRef<ServerState> for SharedSongStore {
    fn from_ref(input: &ServerState) -> Self {
        input.store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
