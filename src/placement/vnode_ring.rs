//! Fixed virtual-node ring placement.
//!
//! The hash space is split into `vnode_count` virtual nodes (`vnode = hash % vnode_count`) and
//! that mapping never changes. What changes when the cluster grows is only the vnode -> node
//! table, so the data that moves is exactly the data living in the reassigned vnodes.
use std::collections::BTreeMap;

use tracing::{event, Level};

use crate::error::{Error, Result};
use crate::hashing::HashValue;

use super::PlacementScheme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VnodeRing {
    node_count: usize,
    /// `vnode2node[vnode_id]` is the physical node owning that vnode
    vnode2node: Vec<usize>,
}

impl VnodeRing {
    /// Assigns vnodes to nodes round-robin (`vnode_id % node_count`)
    pub fn new(node_count: usize, vnode_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(Error::InvalidConfig {
                reason: "VnodeRing placement requires at least one node".to_string(),
            });
        }

        if vnode_count == 0 {
            return Err(Error::InvalidConfig {
                reason: "VnodeRing placement requires at least one vnode".to_string(),
            });
        }

        Ok(Self {
            node_count,
            vnode2node: (0..vnode_count).map(|vnode_id| vnode_id % node_count).collect(),
        })
    }

    pub fn vnode_count(&self) -> usize {
        self.vnode2node.len()
    }

    /// The vnode a hash belongs to. Independent of the number of physical nodes.
    pub fn vnode(&self, hash: HashValue) -> usize {
        hash as usize % self.vnode_count()
    }

    pub fn vnode2node(&self) -> &[usize] {
        &self.vnode2node
    }

    /// Number of vnodes owned by each physical node
    pub fn distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution: BTreeMap<usize, usize> =
            (0..self.node_count).map(|node_id| (node_id, 0)).collect();
        for node_id in self.vnode2node.iter() {
            *distribution.entry(*node_id).or_default() += 1;
        }

        distribution
    }

    /// Adds a physical node and moves `vnode_count / (node_count + 1)` vnodes to it.
    ///
    /// Vnodes are taken greedily: nodes are scanned from 0 upwards and, within a node, its vnodes
    /// in increasing id order. The scan stops as soon as the target is reached, even if that
    /// leaves the remaining nodes untouched (eg: with 10 nodes and 100 vnodes all 9 vnodes come
    /// from node 0). This order is the tie-break rule that keeps runs comparable.
    ///
    /// Returns the ids of the reassigned vnodes, in the order they were reassigned.
    pub fn add_node_and_rebalance(&mut self) -> Result<Vec<usize>> {
        let new_node_id = self.node_count;
        let vnodes_to_assign = self.vnode_count() / (self.node_count + 1);

        let mut reassigned = Vec::with_capacity(vnodes_to_assign);
        'scan: for node_to_take_from in 0..self.node_count {
            for (vnode_id, node_id) in self.vnode2node.iter_mut().enumerate() {
                if reassigned.len() >= vnodes_to_assign {
                    break 'scan;
                }

                if *node_id == node_to_take_from {
                    *node_id = new_node_id;
                    reassigned.push(vnode_id);
                }
            }
        }

        self.node_count += 1;
        event!(
            Level::DEBUG,
            "node {} took over vnodes {:?}",
            new_node_id,
            reassigned
        );

        Ok(reassigned)
    }
}

impl PlacementScheme for VnodeRing {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn add_node(&mut self) -> Result<()> {
        self.add_node_and_rebalance()?;
        Ok(())
    }

    fn owner(&self, hash: HashValue) -> Result<usize> {
        let vnode_id = self.vnode(hash);
        self.vnode2node
            .get(vnode_id)
            .copied()
            .ok_or_else(|| Error::Logic {
                reason: format!("vnode {} has no owner", vnode_id),
            })
    }
}
