//! Runtime configuration for the `tasklist` binary.
//!
//! Configuration is via environment variables:
//! - `TASKLIST_NAME` - Default list name (default: `Today's Todos`)
//! - `RUST_LOG` - Tracing filter (default: `tasklist=info`)

/// Default list name when neither `--name` nor `TASKLIST_NAME` is given.
const DEFAULT_NAME: &str = "Today's Todos";

/// Default tracing filter.
const DEFAULT_LOG_FILTER: &str = "tasklist=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub list_name: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_name: DEFAULT_NAME.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            list_name: get("TASKLIST_NAME").unwrap_or(defaults.list_name),
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
