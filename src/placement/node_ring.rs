//! Contiguous-range ring placement.
//!
//! The key space `[0, key_space)` is split into `node_count` equal contiguous ranges, one per
//! node, in node order. Only the start of each range is stored:
//!
//! key_space: 10000, nodes: 4
//! range_starts: [0, 2500, 5000, 7500]
//!
//! A hash is first folded into the key space (`hash % key_space`) and its owner is the index
//! of the first range start that is not lower than it, wrapping around the ring:
//!
//! folded 0    -> 0
//! folded 1    -> 1 (first start >= 1 is 2500)
//! folded 2500 -> 1
//! folded 7501 -> 4 % 4 = 0 (past the last start, wraps back to node 0)
//!
//! Growing the ring recomputes every start, so most boundaries shift and a large share of
//! keys still changes owner. Less than plain modulo, but far from minimal.
use tracing::{event, Level};

use crate::error::{Error, Result};
use crate::hashing::HashValue;

use super::PlacementScheme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRing {
    key_space: u64,
    range_starts: Vec<u64>,
}

impl NodeRing {
    pub fn new(node_count: usize, key_space: u64) -> Result<Self> {
        if node_count == 0 {
            return Err(Error::InvalidConfig {
                reason: "NodeRing placement requires at least one node".to_string(),
            });
        }

        if key_space == 0 {
            return Err(Error::InvalidConfig {
                reason: "NodeRing placement requires a non-empty key space".to_string(),
            });
        }

        Ok(Self {
            key_space,
            range_starts: Self::compute_range_starts(node_count, key_space),
        })
    }

    /// `key_space / node_count * i` for every node `i` (integer division first)
    fn compute_range_starts(node_count: usize, key_space: u64) -> Vec<u64> {
        let range_size = key_space / node_count as u64;
        (0..node_count as u64).map(|i| range_size * i).collect()
    }

    pub fn range_starts(&self) -> &[u64] {
        &self.range_starts
    }
}

impl PlacementScheme for NodeRing {
    fn node_count(&self) -> usize {
        self.range_starts.len()
    }

    fn add_node(&mut self) -> Result<()> {
        self.range_starts = Self::compute_range_starts(self.node_count() + 1, self.key_space);
        event!(
            Level::DEBUG,
            "recomputed range starts for {} nodes: {:?}",
            self.node_count(),
            self.range_starts
        );

        Ok(())
    }

    fn owner(&self, hash: HashValue) -> Result<usize> {
        let folded = hash as u64 % self.key_space;
        Ok(self.range_starts.partition_point(|start| *start < folded) % self.node_count())
    }
}

#[cfg(test)]
mod tests {
    use super::NodeRing;
    use crate::{hashing::HashValue, placement::PlacementScheme};

    struct TableTest {
        hash: HashValue,
        owner: usize,
    }

    #[test]
    fn test_range_starts() {
        let ring = NodeRing::new(10, 10000).unwrap();
        assert_eq!(
            ring.range_starts(),
            &[0, 1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000]
        );

        // 10000 / 11 truncates to 909
        let ring = NodeRing::new(11, 10000).unwrap();
        assert_eq!(ring.range_starts()[1], 909);
        assert_eq!(ring.range_starts()[10], 9090);
    }

    #[test]
    fn test_owner_table() {
        let ring = NodeRing::new(4, 10000).unwrap();

        let test_cases = vec![
            TableTest { hash: 0, owner: 0 },
            TableTest { hash: 1, owner: 1 },
            TableTest {
                hash: 2500,
                owner: 1,
            },
            TableTest {
                hash: 2501,
                owner: 2,
            },
            TableTest {
                hash: 7500,
                owner: 3,
            },
            TableTest {
                hash: 7501, // past the last start: wraps around back to node 0
                owner: 0,
            },
            TableTest {
                hash: 9999,
                owner: 0,
            },
            TableTest {
                hash: 10001, // folded into the key space first
                owner: 1,
            },
        ];

        for test_case in test_cases {
            assert_eq!(test_case.owner, ring.owner(test_case.hash).unwrap());
        }
    }

    #[test]
    fn test_add_node() {
        let mut ring = NodeRing::new(4, 10000).unwrap();
        ring.add_node().unwrap();

        assert_eq!(ring.node_count(), 5);
        assert_eq!(ring.range_starts(), &[0, 2000, 4000, 6000, 8000]);
        assert_eq!(ring.owner(2500).unwrap(), 2);
        assert_eq!(ring.owner(8001).unwrap(), 0);
    }

    #[test]
    fn test_single_node() {
        let ring = NodeRing::new(1, 10000).unwrap();
        for hash in [0, 1, 5000, HashValue::MAX] {
            assert_eq!(ring.owner(hash).unwrap(), 0);
        }
    }

    #[test]
    fn test_invalid_construction() {
        assert!(NodeRing::new(0, 10000).unwrap_err().is_invalid_config());
        assert!(NodeRing::new(10, 0).unwrap_err().is_invalid_config());
    }

    #[quickcheck]
    fn test_owner_in_range(node_count: u8, key_space: u16, hash: HashValue) -> bool {
        let node_count = node_count as usize + 1;
        let ring = NodeRing::new(node_count, key_space as u64 + 1).unwrap();
        ring.owner(hash).unwrap() < node_count
    }
}
