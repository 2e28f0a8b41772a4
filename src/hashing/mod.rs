//! Integer hash functions used to place data ids.
//!
//! Every placement decision in the simulations derives from a single `u32` computed from
//! the decimal string of the data id. The digest is only used as a uniformly distributed
//! integer hash, nothing here is security sensitive.
use std::io::Cursor;

use murmur3::murmur3_32;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// All placement models work on 32 bit hashes
pub type HashValue = u32;

/// Signature shared by every data id hash.
pub type IdHashFn = fn(u64) -> Result<HashValue>;

/// Selects which [`IdHashFn`] a simulation uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashFunction {
    #[default]
    Sha256,
    Murmur3,
}

impl HashFunction {
    pub fn hash_fn(&self) -> IdHashFn {
        match self {
            HashFunction::Sha256 => id_hash,
            HashFunction::Murmur3 => murmur3_id_hash,
        }
    }
}

/// Leading 4 bytes (big-endian) of the SHA-256 digest of `data_id`'s decimal representation.
pub fn id_hash(data_id: u64) -> Result<HashValue> {
    let digest = Sha256::digest(data_id.to_string().as_bytes());
    let mut leading = [0u8; 4];
    leading.copy_from_slice(&digest[..4]);

    Ok(HashValue::from_be_bytes(leading))
}

/// murmur3 (x86, 32 bits, seed 0) of `data_id`'s decimal representation.
pub fn murmur3_id_hash(data_id: u64) -> Result<HashValue> {
    Ok(murmur3_32(&mut Cursor::new(data_id.to_string()), 0)?)
}
