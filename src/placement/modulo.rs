//! Plain modulo placement: `owner = hash % node_count`
use crate::error::{Error, Result};
use crate::hashing::HashValue;

use super::PlacementScheme;

/// Baseline scheme. Changing the modulus changes the residue of almost every hash,
/// so adding a node reshuffles nearly all keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulo {
    node_count: usize,
}

impl Modulo {
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(Error::InvalidConfig {
                reason: "Modulo placement requires at least one node".to_string(),
            });
        }

        Ok(Self { node_count })
    }
}

impl PlacementScheme for Modulo {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn add_node(&mut self) -> Result<()> {
        self.node_count += 1;
        Ok(())
    }

    fn owner(&self, hash: HashValue) -> Result<usize> {
        Ok(hash as usize % self.node_count)
    }
}
