use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::games::GameRegistry;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    /// Live games, shared across workers.
    pub registry: Arc<GameRegistry>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let registry = GameRegistry::new(
            config.default_start,
            config.submit_policy,
            config.rng_seed,
        );
        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    /// State with default configuration and an empty registry.
    pub fn for_tests() -> Self {
        Self::new(AppConfig::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("games", &self.registry.len())
            .field("config", &self.config)
            .finish()
    }
}
