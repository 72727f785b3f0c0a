//! Process settings read from the environment.
//!
//! Gameplay itself is fixed; these only control reproducibility and logging.
//!
//! - `DINO_SEED`: spawn RNG seed (`u32`), defaults to a time-derived value
//! - `DINO_LOG`: write logs to this file (logging is off when unset)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const SEED_VAR: &str = "DINO_SEED";
pub const LOG_VAR: &str = "DINO_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build settings from a variable lookup (testable without touching the
    /// process environment).
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| anyhow!("{}: invalid seed value: {}", SEED_VAR, raw))?,
            None => time_seed(),
        };

        let log_path = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { seed, log_path })
    }
}

fn time_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos as u32) ^ std::process::id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn explicit_seed_and_log_path() {
        let s = Settings::from_vars(vars(&[("DINO_SEED", "42"), ("DINO_LOG", "/tmp/dino.log")]))
            .unwrap();
        assert_eq!(s.seed, 42);
        assert_eq!(s.log_path, Some(PathBuf::from("/tmp/dino.log")));
    }

    #[test]
    fn defaults_leave_logging_off() {
        let s = Settings::from_vars(vars(&[])).unwrap();
        assert_eq!(s.log_path, None);
    }

    #[test]
    fn blank_log_path_is_ignored() {
        let s = Settings::from_vars(vars(&[("DINO_LOG", "  ")])).unwrap();
        assert_eq!(s.log_path, None);
    }

    #[test]
    fn invalid_seed_is_rejected() {
        let err = Settings::from_vars(vars(&[("DINO_SEED", "-3")])).unwrap_err();
        assert!(err.to_string().contains("DINO_SEED"));
    }
}
