#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod protocol;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;


// Re-exports for public API
pub use config::AppConfig;
pub use error::AppError;
pub use errors::domain::DomainError;
pub use services::games::GameRegistry;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
