//! # Pool Configuration
//!
//! Pools can be tuned from a TOML table loaded once at startup:
//!
//! ```toml
//! name = "bullets"
//! prewarm = 64
//! initial_capacity = 256
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, PoolResult};

/// Default pool name used in log fields.
pub const DEFAULT_POOL_NAME: &str = "pool";

/// Tuning knobs for an [`InstancePool`](crate::InstancePool).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// Name reported in log events.
    pub name: String,
    /// Instances constructed up front, before the first `get`.
    pub prewarm: usize,
    /// Storage reserved up front. Growth past it is still unbounded.
    pub initial_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_POOL_NAME.to_owned(),
            prewarm: 0,
            initial_capacity: 0,
        }
    }
}

impl PoolConfig {
    /// Config with a custom name and default everything else.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// [`PoolError::ConfigParse`] for malformed TOML or unknown keys,
    /// [`PoolError::InvalidConfig`] when validation fails.
    pub fn from_toml_str(text: &str) -> PoolResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| PoolError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// [`PoolError::ConfigRead`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> PoolResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PoolError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks the config for unusable values.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidConfig`] for a blank name.
    pub fn validate(&self) -> PoolResult<()> {
        if self.name.trim().is_empty() {
            return Err(PoolError::InvalidConfig("pool name is empty".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = PoolConfig::from_toml_str("").unwrap();
        assert_eq!(config, PoolConfig::default());
        assert_eq!(config.name, "pool");
    }

    #[test]
    fn test_full_table() {
        let config = PoolConfig::from_toml_str(
            r#"
            name = "bullets"
            prewarm = 16
            initial_capacity = 64
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "bullets");
        assert_eq!(config.prewarm, 16);
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = PoolConfig::from_toml_str("name = \"  \"").unwrap_err();
        assert_eq!(err, PoolError::InvalidConfig("pool name is empty".to_owned()));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = PoolConfig::from_toml_str("max_size = 10").unwrap_err();
        assert!(matches!(err, PoolError::ConfigParse(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = PoolConfig::from_toml_str("prewarm = \"lots\"").unwrap_err();
        assert!(matches!(err, PoolError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PoolConfig::load("/definitely/not/here/pool.toml").unwrap_err();
        assert!(matches!(err, PoolError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("uniprep_pool_{}.toml", std::process::id()));
        std::fs::write(&path, "name = \"sparks\"\nprewarm = 2\n").unwrap();
        let config = PoolConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config, PoolConfig { prewarm: 2, ..PoolConfig::named("sparks") });
    }
}
