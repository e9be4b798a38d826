//! Application state management

use std::sync::Arc;
use voxrelay_core::{Config, RelayService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(relay: RelayService, config: Config) -> Self {
        Self {
            relay: Arc::new(relay),
            config: Arc::new(config),
        }
    }
}
