//! Module that contains the different placement schemes being compared
use crate::error::Result;
use crate::hashing::HashValue;

pub mod modulo;
pub mod node_ring;
pub mod vnode_ring;

/// This trait defines a PlacementScheme (ie: which physical node owns a given hash)
///
/// `add_node` is the only mutating operation. Every hash whose owner changes after it is data
/// that would have to be moved between nodes, which is exactly what the simulations measure.
pub trait PlacementScheme {
    /// number of physical nodes currently part of the scheme
    fn node_count(&self) -> usize;

    /// adds one physical node to the scheme. Its id is always the previous `node_count`
    fn add_node(&mut self) -> Result<()>;

    /// returns the index of the physical node that owns `hash`
    fn owner(&self, hash: HashValue) -> Result<usize>;
}
