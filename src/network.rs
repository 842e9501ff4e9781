//! Supported networks

use crate::error::GenesisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network identifier: each maps to exactly one genesis block
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    #[default]
    #[serde(rename = "main", alias = "mainnet")]
    Mainnet,
    #[serde(rename = "regtest")]
    Regtest,
    #[serde(rename = "testnet", alias = "testnet4")]
    Testnet,
    #[serde(rename = "simnet")]
    Simnet,
}

impl Network {
    /// Every supported network, in registry order
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Regtest,
        Network::Testnet,
        Network::Simnet,
    ];

    /// Canonical identifier used in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Regtest => "regtest",
            Network::Testnet => "testnet",
            Network::Simnet => "simnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = GenesisError;

    /// Case-insensitive; accepts the canonical ids plus `mainnet` and `testnet4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Mainnet),
            "regtest" => Ok(Network::Regtest),
            "testnet" | "testnet4" => Ok(Network::Testnet),
            "simnet" => Ok(Network::Simnet),
            _ => Err(GenesisError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_and_aliases() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>().unwrap(), network);
        }
        assert_eq!("MainNet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("testnet4".parse::<Network>().unwrap(), Network::Testnet);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "signet".parse::<Network>(),
            Err(GenesisError::UnknownNetwork("signet".to_string()))
        );
    }

    #[test]
    fn test_network_serialization() {
        let json = serde_json::to_string(&Network::Regtest).unwrap();
        assert_eq!(json, "\"regtest\"");
        let json = serde_json::to_string(&Network::Mainnet).unwrap();
        assert_eq!(json, "\"main\"");
        let parsed: Network = serde_json::from_str("\"testnet4\"").unwrap();
        assert_eq!(parsed, Network::Testnet);
    }
}
