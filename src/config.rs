use std::path::PathBuf;

use crate::error::{Error, Result};

pub const SEED_VAR: &str = "ROOMWALK_SEED";
pub const LOG_VAR: &str = "ROOMWALK_LOG";
pub const LOG_FILE_VAR: &str = "ROOMWALK_LOG_FILE";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads settings through `lookup` so tests need not touch the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup(SEED_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    return Err(Error::InvalidSetting {
                        var: SEED_VAR,
                        value,
                    })
                }
            },
            None => None,
        };
        let log_filter = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_file = lookup(LOG_FILE_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(Self {
            seed,
            log_filter,
            log_file,
        })
    }
}
