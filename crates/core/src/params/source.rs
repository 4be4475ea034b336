//! Acquisition of the per-rate tables from the published parameter set.
//!
//! The tables come from the audited Penumbra parameter generator for this
//! curve's scalar field. They are produced once per rate on first use and
//! flattened into this crate's row-major layout; everything downstream
//! treats them as opaque precomputed data.

use ark_bls12_377::Fr;
use ark_ff::PrimeField;
use poseidon_parameters::v1::MatrixOperations;

use super::{Parameters, FULL_ROUNDS};
use crate::error::{PoseidonError, PoseidonResult};

/// Security level in bits bound into the parameter set.
const SECURITY_LEVEL: usize = 128;

pub(super) fn load(rate: usize) -> PoseidonResult<Parameters> {
    let t = rate + 1;
    let source =
        poseidon_paramgen::v1::generate::<Fr>(SECURITY_LEVEL, t, Fr::MODULUS, true);

    let r_f = source.rounds.full();
    let r_p = source.rounds.partial();
    if r_f != FULL_ROUNDS {
        return Err(PoseidonError::MissingParameterTable { rate });
    }

    let optimized = &source.optimized_mds;
    let params = Parameters {
        rate,
        t,
        r_f,
        r_p,
        arc: source.optimized_arc.elements().to_vec(),
        mds: source.mds.elements().to_vec(),
        mi: Some(optimized.M_i.elements().to_vec()),
        sparse_v: optimized
            .v_collection
            .iter()
            .flat_map(|m| m.elements().to_vec())
            .collect(),
        sparse_w: optimized
            .w_hat_collection
            .iter()
            .flat_map(|m| m.elements().to_vec())
            .collect(),
        m00: optimized.M_00,
    };
    params.validate()?;
    Ok(params)
}
