//! Scale parameters for a rebalancing simulation.
//!
//! A [`Config`] is an immutable value handed to every simulation. Defaults are the
//! canonical scenario (10 nodes growing to 11, 100 vnodes, 10000 data ids), but a JSON file
//! can override any subset of the fields.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hashing::HashFunction;

/// How many physical nodes join the cluster in each simulation
pub const NODES_ADDED: usize = 1;

pub const DEFAULT_NODE_COUNT: usize = 10;
pub const DEFAULT_VNODE_COUNT: usize = 100;
pub const DEFAULT_DATA_ID_COUNT: u64 = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// physical nodes before the addition
    pub node_count: usize,
    pub vnode_count: usize,
    /// size of the synthetic key space: data ids are `0..data_id_count`
    pub data_id_count: u64,
    pub hash_function: HashFunction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            vnode_count: DEFAULT_VNODE_COUNT,
            data_id_count: DEFAULT_DATA_ID_COUNT,
            hash_function: HashFunction::default(),
        }
    }
}

impl Config {
    /// Reads a json encoded [`Config`] from `path` and validates it
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let stringified_json = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&stringified_json)?;
        config.validate()?;

        Ok(config)
    }

    /// Number of physical nodes after the addition
    pub fn new_node_count(&self) -> usize {
        self.node_count + NODES_ADDED
    }

    /// Every count is used as a divisor or modulus somewhere, so none of them can be zero.
    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(Error::InvalidConfig {
                reason: "node_count must be greater than 0".to_string(),
            });
        }

        if self.vnode_count == 0 {
            return Err(Error::InvalidConfig {
                reason: "vnode_count must be greater than 0".to_string(),
            });
        }

        if self.data_id_count == 0 {
            return Err(Error::InvalidConfig {
                reason: "data_id_count must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Config;
    use crate::hashing::HashFunction;

    #[test]
    fn deserialize_default() {
        let mut config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        config_path.push("conf/default.json");

        let config = Config::from_path(config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_murmur3() {
        let mut config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        config_path.push("conf/murmur3_small.json");

        let config = Config::from_path(config_path).unwrap();

        assert!(matches!(
            config,
            Config {
                node_count: 4,
                vnode_count: 64,
                data_id_count: 2000,
                hash_function: HashFunction::Murmur3,
            }
        ));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"node_count": 3}"#).unwrap();
        assert_eq!(config.node_count, 3);
        assert_eq!(config.new_node_count(), 4);
        assert_eq!(config.vnode_count, 100);
        assert_eq!(config.data_id_count, 10000);
        assert_eq!(config.hash_function, HashFunction::Sha256);
    }

    #[test]
    fn zero_counts_are_rejected() {
        let zero_nodes = Config {
            node_count: 0,
            ..Default::default()
        };
        assert!(zero_nodes.validate().unwrap_err().is_invalid_config());

        let zero_vnodes = Config {
            vnode_count: 0,
            ..Default::default()
        };
        assert!(zero_vnodes.validate().unwrap_err().is_invalid_config());

        let zero_ids = Config {
            data_id_count: 0,
            ..Default::default()
        };
        assert!(zero_ids.validate().unwrap_err().is_invalid_config());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_path("conf/does_not_exist.json").unwrap_err();
        assert!(matches!(err, crate::error::Error::Io { .. }));
    }

    #[test]
    fn unknown_hash_function_is_rejected() {
        let err = serde_json::from_str::<Config>(r#"{"hash_function": "md5"}"#);
        assert!(err.is_err());
    }
}
