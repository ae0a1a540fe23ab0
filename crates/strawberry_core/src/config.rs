//! Registry configuration and engine selection.
//!
//! # Responsibility
//! - Resolve engine kind and logging options from the environment.
//! - Construct the configured engine behind the `ResourceEngine` contract.
//!
//! # Invariants
//! - Unknown engine names are rejected, never silently defaulted.
//! - Blank environment values are treated as unset.

use crate::engine::resource_engine::{InMemoryResourceEngine, ResourceEngine};
use crate::logging::{default_log_level, normalize_level};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

pub const ENGINE_ENV: &str = "ENGINE";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "LOG_DIR";

/// Storage backend selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    /// Process-local map; state is lost on restart.
    #[default]
    Memory,
    /// On-disk key-value file. Reserved, not available in this build.
    Bolt,
}

impl EngineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Bolt => "bolt",
        }
    }
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "bolt" => Ok(Self::Bolt),
            other => Err(ConfigError::UnknownEngine(other.to_string())),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownEngine(String),
    UnsupportedEngine(EngineKind),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEngine(name) => {
                write!(f, "unknown engine `{name}`; expected memory|bolt")
            }
            Self::UnsupportedEngine(kind) => {
                write!(f, "engine `{kind}` is not available in this build")
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

/// Startup options for a registry process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub engine: EngineKind,
    pub log_level: String,
    /// Rolling log directory; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl RegistryConfig {
    /// Reads `ENGINE`, `LOG_LEVEL` and `LOG_DIR` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    ///
    /// Missing or blank keys fall back to `RegistryConfig::default()`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(engine) = read(ENGINE_ENV) {
            config.engine = engine.parse()?;
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(&level)
                .map_err(ConfigError::InvalidLogLevel)?
                .to_string();
        }
        config.log_dir = read(LOG_DIR_ENV).map(PathBuf::from);
        Ok(config)
    }

    /// Opens the engine named by this config.
    pub fn open_engine(&self) -> Result<Box<dyn ResourceEngine>, ConfigError> {
        open_engine(self.engine)
    }
}

/// Constructs an engine of the requested kind.
pub fn open_engine(kind: EngineKind) -> Result<Box<dyn ResourceEngine>, ConfigError> {
    match kind {
        EngineKind::Memory => {
            info!("event=engine_open module=config status=ok engine={kind}");
            Ok(Box::new(InMemoryResourceEngine::new()))
        }
        EngineKind::Bolt => {
            error!(
                "event=engine_open module=config status=error engine={kind} error_code=engine_unsupported"
            );
            Err(ConfigError::UnsupportedEngine(kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{open_engine, ConfigError, EngineKind, RegistryConfig};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn engine_kind_parses_case_insensitively() {
        assert_eq!("MEMORY".parse::<EngineKind>().unwrap(), EngineKind::Memory);
        assert_eq!(" Bolt ".parse::<EngineKind>().unwrap(), EngineKind::Bolt);
        assert_eq!(
            "redis".parse::<EngineKind>().unwrap_err(),
            ConfigError::UnknownEngine("redis".to_string())
        );
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = RegistryConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.engine, EngineKind::Memory);
    }

    #[test]
    fn lookup_values_override_defaults() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            ("ENGINE", "MEMORY"),
            ("LOG_LEVEL", "Warning"),
            ("LOG_DIR", " /var/log/strawberry "),
        ]))
        .unwrap();

        assert_eq!(config.engine, EngineKind::Memory);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/strawberry")));
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config =
            RegistryConfig::from_lookup(lookup_from(&[("ENGINE", "  "), ("LOG_DIR", "")])).unwrap();
        assert_eq!(config.engine, EngineKind::Memory);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let err = RegistryConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }

    #[test]
    fn bolt_engine_is_not_available() {
        let err = open_engine(EngineKind::Bolt).err().unwrap();
        assert_eq!(err, ConfigError::UnsupportedEngine(EngineKind::Bolt));
        assert!(open_engine(EngineKind::Memory).is_ok());
    }
}
