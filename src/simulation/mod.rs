//! The three rebalancing simulations.
//!
//! Each simulation builds a [`PlacementScheme`] for `node_count` nodes, clones it, adds one node
//! to the clone and then resolves the owner of every data id in `0..data_id_count` under both
//! configurations. A data id has moved when its owner index differs between the two.
//!
//! Simulations share nothing: every call builds its own tables from the [`Config`] it receives,
//! so running one twice yields the same [`RebalanceReport`].
use std::fmt::Display;

use serde::Serialize;
use tracing::{event, instrument, Level};

use crate::config::Config;
use crate::error::Result;
use crate::hashing::IdHashFn;
use crate::placement::{
    modulo::Modulo, node_ring::NodeRing, vnode_ring::VnodeRing, PlacementScheme,
};

/// The placement models being compared, in the order they are run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Model {
    Plain,
    NodeRing,
    VnodeRing,
}

impl Model {
    pub fn name(&self) -> &'static str {
        match self {
            Model::Plain => "plain node model",
            Model::NodeRing => "node-ring model",
            Model::VnodeRing => "fixed node-ring model",
        }
    }
}

/// Outcome of a single simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RebalanceReport {
    pub model: Model,
    pub moved_ids: u64,
    pub total_ids: u64,
    /// Only set by the vnode model
    pub vnodes_reassigned: Option<usize>,
}

impl RebalanceReport {
    pub fn percent_moved(&self) -> f64 {
        100.0 * self.moved_ids as f64 / self.total_ids as f64
    }
}

impl Display for RebalanceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ids moved, {:.2}%",
            self.model.name(),
            self.moved_ids,
            self.percent_moved()
        )
    }
}

/// Counts the data ids whose owner differs between `old` and `new`
fn count_moved_ids<P: PlacementScheme>(
    old: &P,
    new: &P,
    data_id_count: u64,
    hash_fn: IdHashFn,
) -> Result<u64> {
    let mut moved_ids = 0;
    for data_id in 0..data_id_count {
        let hash = hash_fn(data_id)?;
        if old.owner(hash)? != new.owner(hash)? {
            moved_ids += 1;
        }
    }

    Ok(moved_ids)
}

/// Plain modulo model: `hash % N` before, `hash % (N + 1)` after
#[instrument(level = "info")]
pub fn node(config: &Config) -> Result<RebalanceReport> {
    config.validate()?;

    let old = Modulo::new(config.node_count)?;
    let mut new = old.clone();
    new.add_node()?;

    let moved_ids = count_moved_ids(
        &old,
        &new,
        config.data_id_count,
        config.hash_function.hash_fn(),
    )?;

    Ok(RebalanceReport {
        model: Model::Plain,
        moved_ids,
        total_ids: config.data_id_count,
        vnodes_reassigned: None,
    })
}

/// Contiguous-range ring model, see [`NodeRing`]
#[instrument(level = "info")]
pub fn node_ring(config: &Config) -> Result<RebalanceReport> {
    config.validate()?;

    let old = NodeRing::new(config.node_count, config.data_id_count)?;
    let mut new = old.clone();
    new.add_node()?;
    event!(
        Level::DEBUG,
        "range starts: {:?} -> {:?}",
        old.range_starts(),
        new.range_starts()
    );

    let moved_ids = count_moved_ids(
        &old,
        &new,
        config.data_id_count,
        config.hash_function.hash_fn(),
    )?;

    Ok(RebalanceReport {
        model: Model::NodeRing,
        moved_ids,
        total_ids: config.data_id_count,
        vnodes_reassigned: None,
    })
}

/// Fixed virtual-node ring model, see [`VnodeRing`]
#[instrument(level = "info")]
pub fn vnode_ring(config: &Config) -> Result<RebalanceReport> {
    config.validate()?;

    let old = VnodeRing::new(config.node_count, config.vnode_count)?;
    let mut new = old.clone();
    let reassigned = new.add_node_and_rebalance()?;
    event!(
        Level::DEBUG,
        "vnodes per node after rebalance: {:?}",
        new.distribution()
    );

    let moved_ids = count_moved_ids(
        &old,
        &new,
        config.data_id_count,
        config.hash_function.hash_fn(),
    )?;

    Ok(RebalanceReport {
        model: Model::VnodeRing,
        moved_ids,
        total_ids: config.data_id_count,
        vnodes_reassigned: Some(reassigned.len()),
    })
}

/// Runs plain, node-ring and vnode-ring in that order
pub fn run_all(config: &Config) -> Result<Vec<RebalanceReport>> {
    let reports = vec![node(config)?, node_ring(config)?, vnode_ring(config)?];
    for report in reports.iter() {
        event!(
            Level::INFO,
            model = report.model.name(),
            moved_ids = report.moved_ids,
            percent_moved = report.percent_moved(),
            "simulation finished"
        );
    }

    Ok(reports)
}
