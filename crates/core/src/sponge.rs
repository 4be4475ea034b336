//! Fixed-Arity Sponge Hasher
//!
//! A hasher absorbs exactly `rate` field elements alongside a domain tag,
//! runs the permutation once, and squeezes a single element. The domain tag
//! occupies lane 0 of the state; the digest is read from lane 1.

use ark_bls12_377::Fr;

use crate::error::{PoseidonError, PoseidonResult};
use crate::params::Parameters;
use crate::permutation::permute;

/// A Poseidon hasher bound to one rate.
#[derive(Clone, Copy)]
pub struct Hasher {
    params: &'static Parameters,
}

impl Hasher {
    /// Create a hasher for the given rate (1..=7).
    pub fn new(rate: usize) -> PoseidonResult<Self> {
        Ok(Self {
            params: Parameters::for_rate(rate)?,
        })
    }

    /// The number of inputs this hasher absorbs per call.
    pub fn rate(&self) -> usize {
        self.params.rate
    }

    /// Hash exactly `rate` field elements under the given domain tag.
    pub fn hash(&self, inputs: &[Fr], domain: &Fr) -> PoseidonResult<Fr> {
        if inputs.len() != self.params.rate {
            return Err(PoseidonError::ArityMismatch {
                expected: self.params.rate,
                got: inputs.len(),
            });
        }
        let mut state = Vec::with_capacity(self.params.t);
        state.push(*domain);
        state.extend_from_slice(inputs);
        permute(self.params, &mut state);
        Ok(state[1])
    }
}

/// Hash a slice of 1 to 7 field elements, selecting the rate from the input
/// length. Fails with [`PoseidonError::UnsupportedRate`] for other lengths.
pub fn hash(inputs: &[Fr], domain: &Fr) -> PoseidonResult<Fr> {
    Hasher::new(inputs.len())?.hash(inputs, domain)
}

/// Derive a domain tag from a byte string interpreted as a little-endian
/// integer, reduced into the field.
pub fn domain_from_le_bytes(bytes: &[u8]) -> Fr {
    crate::field::fr_from_le_bytes(bytes)
}

/// Hash one element.
pub fn hash_1(domain: &Fr, a: Fr) -> PoseidonResult<Fr> {
    hash(&[a], domain)
}

/// Hash two elements.
pub fn hash_2(domain: &Fr, a: Fr, b: Fr) -> PoseidonResult<Fr> {
    hash(&[a, b], domain)
}

/// Hash three elements.
pub fn hash_3(domain: &Fr, a: Fr, b: Fr, c: Fr) -> PoseidonResult<Fr> {
    hash(&[a, b, c], domain)
}

/// Hash four elements.
pub fn hash_4(domain: &Fr, a: Fr, b: Fr, c: Fr, d: Fr) -> PoseidonResult<Fr> {
    hash(&[a, b, c, d], domain)
}

/// Hash five elements.
pub fn hash_5(domain: &Fr, a: Fr, b: Fr, c: Fr, d: Fr, e: Fr) -> PoseidonResult<Fr> {
    hash(&[a, b, c, d, e], domain)
}

/// Hash six elements.
pub fn hash_6(domain: &Fr, a: Fr, b: Fr, c: Fr, d: Fr, e: Fr, f: Fr) -> PoseidonResult<Fr> {
    hash(&[a, b, c, d, e, f], domain)
}

/// Hash seven elements.
pub fn hash_7(domain: &Fr, a: Fr, b: Fr, c: Fr, d: Fr, e: Fr, f: Fr, g: Fr) -> PoseidonResult<Fr> {
    hash(&[a, b, c, d, e, f, g], domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::Zero;

    #[test]
    fn test_arity_mismatch() {
        let hasher = Hasher::new(3).unwrap();
        let inputs = [Fr::from(1u64), Fr::from(2u64)];
        assert_eq!(
            hasher.hash(&inputs, &Fr::zero()).unwrap_err(),
            PoseidonError::ArityMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_unsupported_rates() {
        assert_eq!(
            hash(&[], &Fr::zero()).unwrap_err(),
            PoseidonError::UnsupportedRate(0)
        );
        let inputs = vec![Fr::from(1u64); 8];
        assert_eq!(
            hash(&inputs, &Fr::zero()).unwrap_err(),
            PoseidonError::UnsupportedRate(8)
        );
        assert!(Hasher::new(0).is_err());
        assert!(Hasher::new(8).is_err());
    }

    #[test]
    fn test_domain_tag_affects_digest() {
        let inputs = [Fr::from(42u64)];
        let d0 = hash(&inputs, &Fr::zero()).unwrap();
        let d1 = hash(&inputs, &Fr::from(1u64)).unwrap();
        assert_ne!(d0, d1);
    }

    #[test]
    fn test_fixed_arity_wrappers_match_dispatcher() {
        let domain = Fr::from(7u64);
        let x: Vec<Fr> = (1..=7u64).map(Fr::from).collect();
        assert_eq!(hash_1(&domain, x[0]).unwrap(), hash(&x[..1], &domain).unwrap());
        assert_eq!(
            hash_4(&domain, x[0], x[1], x[2], x[3]).unwrap(),
            hash(&x[..4], &domain).unwrap()
        );
        assert_eq!(
            hash_7(&domain, x[0], x[1], x[2], x[3], x[4], x[5], x[6]).unwrap(),
            hash(&x[..7], &domain).unwrap()
        );
    }
}
