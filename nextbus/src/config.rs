//! Runtime configuration.
//!
//! Read from the environment at startup:
//!
//! | Variable                      | Default                                  |
//! |-------------------------------|------------------------------------------|
//! | `NEXTRIP_BASE_URL`            | `https://svc.metrotransit.org/nextripv2` |
//! | `NEXTRIP_TIMEOUT_SECS`        | 30                                       |
//! | `NEXTBUS_CYCLE_TIMEOUT_SECS`  | 60                                       |
//! | `NEXTBUS_MOCK_DATA`           | unset (use the live service)             |

use std::path::PathBuf;
use std::time::Duration;

use crate::nextrip::NexTripConfig;

const BASE_URL_VAR: &str = "NEXTRIP_BASE_URL";
const TIMEOUT_VAR: &str = "NEXTRIP_TIMEOUT_SECS";
const CYCLE_TIMEOUT_VAR: &str = "NEXTBUS_CYCLE_TIMEOUT_SECS";
const MOCK_DATA_VAR: &str = "NEXTBUS_MOCK_DATA";

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number of seconds, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },
}

/// Per-session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Upper bound on one route → estimate cycle.
    pub cycle_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cycle_timeout: Duration::from_secs(60),
        }
    }
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub nextrip: NexTripConfig,
    pub session: SessionConfig,
    /// Serve this fixture instead of calling the live service.
    pub mock_data: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut nextrip = NexTripConfig::new();
        if let Some(url) = lookup(BASE_URL_VAR).filter(|s| !s.is_empty()) {
            nextrip = nextrip.with_base_url(url);
        }
        if let Some(secs) = seconds(&lookup, TIMEOUT_VAR)? {
            nextrip = nextrip.with_timeout(secs);
        }

        let mut session = SessionConfig::default();
        if let Some(secs) = seconds(&lookup, CYCLE_TIMEOUT_VAR)? {
            session.cycle_timeout = Duration::from_secs(secs);
        }

        let mock_data = lookup(MOCK_DATA_VAR)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            nextrip,
            session,
            mock_data,
        })
    }
}

fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(secs)),
        _ => Err(ConfigError::InvalidSeconds { var, value }),
    }
}
