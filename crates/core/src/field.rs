//! Field Element Encoding Helpers
//!
//! The hash operates over the BLS12-377 scalar field. All arithmetic is
//! delegated to the arkworks field type, which keeps values in canonical
//! reduced form; this module only provides the encode/decode surface for
//! callers that move elements in and out of strings or byte sequences.

use core::str::FromStr;

use ark_bls12_377::Fr;
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::CanonicalSerialize;

use crate::error::{PoseidonError, PoseidonResult};

/// Parse a field element from a decimal string, reducing modulo the field
/// order. Leading zeros and non-digit characters are rejected.
pub fn fr_from_str(s: &str) -> PoseidonResult<Fr> {
    Fr::from_str(s)
        .map_err(|_| PoseidonError::InvalidFieldElement(format!("not a valid decimal element: {s:?}")))
}

/// Interpret a byte sequence as a little-endian unsigned integer and reduce
/// it into the field.
pub fn fr_from_le_bytes(bytes: &[u8]) -> Fr {
    Fr::from_le_bytes_mod_order(bytes)
}

/// Canonical 32-byte little-endian encoding of a field element.
pub fn fr_to_le_bytes(value: &Fr) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value
        .serialize_compressed(&mut bytes[..])
        .expect("32-byte buffer always fits a compressed scalar");
    bytes
}

/// Serialize a field element's canonical representative in the given radix.
///
/// Radix 10 and 16 are supported; anything else is rejected.
pub fn fr_to_string(value: &Fr, radix: u32) -> PoseidonResult<String> {
    match radix {
        10 => Ok(value.into_bigint().to_string()),
        16 => Ok(hex::encode(value.into_bigint().to_bytes_be())),
        _ => Err(PoseidonError::InvalidFieldElement(format!(
            "unsupported radix {radix}"
        ))),
    }
}
