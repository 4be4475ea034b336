//! Variable-Length Hashing by Tree Reduction
//!
//! Arbitrary-length input is reduced level by level: each level is split
//! into consecutive chunks of at most seven elements, every chunk is hashed
//! with the caller's domain tag, and the digests form the next level. Chunk
//! boundaries are deterministic, so two implementations agree bit-for-bit.

use ark_bls12_377::Fr;
use ark_std::Zero;

use crate::error::PoseidonResult;
use crate::params::MAX_RATE;
use crate::sponge::hash;

/// Hash any number of field elements under one domain tag.
///
/// The empty input hashes to the zero element; a single input is equivalent
/// to [`hash`] at rate 1.
pub fn multi_hash(inputs: &[Fr], domain: &Fr) -> PoseidonResult<Fr> {
    if inputs.is_empty() {
        return Ok(Fr::zero());
    }
    if inputs.len() == 1 {
        return hash(inputs, domain);
    }

    let mut level = inputs.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity((level.len() + MAX_RATE - 1) / MAX_RATE);
        for chunk in level.chunks(MAX_RATE) {
            next.push(hash(chunk, domain)?);
        }
        level = next;
    }
    Ok(level[0])
}
