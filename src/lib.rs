//! Measures how many data items change owner when one node joins a cluster, under three
//! placement strategies: plain modulo hashing, a contiguous node-range ring and a fixed
//! virtual-node ring.
pub mod config;
pub mod error;
pub mod hashing;
pub mod placement;
pub mod simulation;
pub mod telemetry;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
