//! Runtime configuration.
//!
//! Resolved once at startup from the process environment (after `.env` has been loaded) and then
//! passed to the command handlers, which never read environment variables themselves.

/// Environment variable bounding `gen --count`.
pub const MAX_COUNT_VAR: &str = "UUIDX_MAX_COUNT";

/// Environment variable holding `tracing` filter directives.
pub const LOG_VAR: &str = "UUIDX_LOG";

pub const DEFAULT_MAX_COUNT: usize = 10_000;
pub const DEFAULT_LOG_FILTER: &str = "uuidx=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidMaxCount { var: &'static str, value: String },
}

/// CLI configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    max_count: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

impl CliConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_count = match lookup(MAX_COUNT_VAR) {
            None => DEFAULT_MAX_COUNT,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidMaxCount {
                        var: MAX_COUNT_VAR,
                        value,
                    })
                }
            },
        };

        Ok(Self { max_count })
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }
}
