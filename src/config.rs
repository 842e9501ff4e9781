//! Configuration for genesis selection
//!
//! Selects which network's genesis the node boots with. Settings can come
//! from a config file (serde), environment variables, or be passed
//! programmatically. Bad values are errors; nothing falls back to a default
//! once a value has been supplied.

use crate::error::{GenesisError, Result};
use crate::network::Network;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the network (`main`, `regtest`, `testnet`, `simnet`)
pub const ENV_NETWORK: &str = "BLVM_GENESIS_NETWORK";

/// Genesis configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Network whose genesis block the node starts from
    /// Default: main (only when no network is configured at all)
    #[serde(default)]
    pub network: Network,
}

impl GenesisConfig {
    /// Load configuration from environment variables
    ///
    /// An unset variable leaves the default in place. A set variable that
    /// names no supported network is an error.
    ///
    /// # Errors
    ///
    /// [`GenesisError::UnknownNetwork`] for an unrecognised `BLVM_GENESIS_NETWORK`,
    /// [`GenesisError::Config`] if the variable is not valid unicode.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENV_NETWORK) {
            Ok(val) => Self::from_lookup(|key| (key == ENV_NETWORK).then(|| val.clone())),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(GenesisError::Config(
                format!("{ENV_NETWORK} is not valid unicode").into(),
            )),
        }
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// Keys are the `ENV_*` names. Lets callers feed values from any source
    /// and keeps tests independent of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup(ENV_NETWORK) {
            config.network = val.parse::<Network>()?;
        }

        Ok(config)
    }
}

/// Global genesis configuration instance
///
/// Set once at startup by the configuration loader.
static GLOBAL_GENESIS_CONFIG: std::sync::OnceLock<GenesisConfig> = std::sync::OnceLock::new();

/// Initialize global genesis configuration
///
/// Call once at startup. A second call fails and leaves the first value in place.
pub fn init_genesis_config(config: GenesisConfig) -> Result<()> {
    GLOBAL_GENESIS_CONFIG
        .set(config)
        .map_err(|_| GenesisError::Config("Genesis config already initialized".into()))
}

/// Get global genesis configuration
///
/// Returns the global config if initialized, otherwise loads it from the
/// environment with [`GenesisConfig::from_env`], propagating its errors.
pub fn get_genesis_config() -> Result<GenesisConfig> {
    match GLOBAL_GENESIS_CONFIG.get() {
        Some(config) => Ok(config.clone()),
        None => GenesisConfig::from_env(),
    }
}
