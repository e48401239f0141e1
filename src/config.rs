//! Service configuration, read from the environment (and `.env` when present).

use std::env;

use crate::error::{PlotError, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_SPOTS: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    /// Upper bound on the number of items a single HTTP request may produce.
    pub max_spots: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_spots: DEFAULT_MAX_SPOTS,
        }
    }
}

impl Config {
    /// Loads `.env` if it exists, then reads `GARDEN_BIND_ADDR` and `GARDEN_MAX_SPOTS`.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(PlotError::Config(format!("failed to read .env: {e}")));
            }
        }
        Self::from_vars(
            env::var("GARDEN_BIND_ADDR").ok(),
            env::var("GARDEN_MAX_SPOTS").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, max_spots: Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let bind_addr = bind_addr
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(defaults.bind_addr);
        let max_spots = match max_spots {
            None => defaults.max_spots,
            Some(raw) => raw.trim().parse().map_err(|e| {
                PlotError::Config(format!("GARDEN_MAX_SPOTS must be a non-negative integer ({raw:?}: {e})"))
            })?,
        };
        Ok(Self {
            bind_addr,
            max_spots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config =
            Config::from_vars(Some("127.0.0.1:9000".into()), Some(" 42 ".into())).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.max_spots, 42);
    }

    #[test]
    fn test_blank_bind_addr_falls_back() {
        let config = Config::from_vars(Some("  ".into()), None).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_invalid_max_spots() {
        let result = Config::from_vars(None, Some("lots".into()));
        assert!(matches!(result, Err(PlotError::Config(_))));
    }
}
