use std::env;
use std::str::FromStr;

use crate::domain::rules::{validate_starting_score, SubmissionPolicy, DEFAULT_STARTING_SCORE};
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Starting score for games created without one.
    pub default_start: u32,
    /// Base seed for reproducible games; entropy when unset.
    pub rng_seed: Option<u64>,
    pub submit_policy: SubmissionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_start: DEFAULT_STARTING_SCORE,
            rng_seed: None,
            submit_policy: SubmissionPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Build from `DARTBUDDY_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("DARTBUDDY_HOST").unwrap_or(defaults.host);
        let port = parsed(&lookup, "DARTBUDDY_PORT")?.unwrap_or(defaults.port);
        let default_start =
            parsed(&lookup, "DARTBUDDY_DEFAULT_START")?.unwrap_or(defaults.default_start);
        validate_starting_score(default_start)
            .map_err(|e| AppError::config(format!("DARTBUDDY_DEFAULT_START: {e}")))?;
        let rng_seed = parsed(&lookup, "DARTBUDDY_RNG_SEED")?;
        let submit_policy = match lookup("DARTBUDDY_SUBMIT_POLICY") {
            Some(raw) => SubmissionPolicy::from_str(&raw)
                .map_err(|e| AppError::config(format!("DARTBUDDY_SUBMIT_POLICY: {e}")))?,
            None => defaults.submit_policy,
        };

        Ok(Self {
            host,
            port,
            default_start,
            rng_seed,
            submit_policy,
        })
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Parse an optional variable, failing loudly on garbage.
fn parsed<T, F>(lookup: &F, name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
    }
}
