//! Poseidon hashing over the BLS12-377 scalar field.
//!
//! A fixed-arity cryptographic compression function built on the Poseidon
//! permutation with the Penumbra parameter set (x^17 S-box, 8 full rounds,
//! optimized partial-round schedule), plus a tree-reduction mode for
//! variable-length input.
//!
//! # Modules
//! - `field`: encode/decode helpers for the scalar-field element type
//! - `params`: precomputed per-rate parameter tables
//! - `permutation`: the round engine
//! - `sponge`: fixed-arity hashing and domain tags
//! - `tree`: variable-length hashing by tree reduction
//!
//! # Example
//! ```
//! use poseidon377_core::{domain_from_le_bytes, hash, multi_hash, Fr};
//!
//! let domain = domain_from_le_bytes(b"my_application_tag");
//! let digest = hash(&[Fr::from(1u64), Fr::from(2u64)], &domain).unwrap();
//! let combined = multi_hash(&[digest, Fr::from(3u64)], &domain).unwrap();
//! assert_ne!(digest, combined);
//! ```

pub mod error;
pub mod field;
pub mod params;
mod permutation;
pub mod sponge;
pub mod tree;

// Re-export common types
pub use ark_bls12_377::Fr;
pub use error::{PoseidonError, PoseidonResult};
pub use params::{Parameters, FULL_ROUNDS, MAX_RATE};
pub use sponge::{
    domain_from_le_bytes, hash, hash_1, hash_2, hash_3, hash_4, hash_5, hash_6, hash_7, Hasher,
};
pub use tree::multi_hash;
