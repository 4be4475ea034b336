//! Poseidon Permutation Engine
//!
//! Transforms a state vector of width `t = rate + 1` through the fixed
//! schedule of full and partial rounds. The partial rounds run in the
//! optimized form: the transition round mixes with the dense optimized
//! matrix, and every following partial round applies an O(t) sparse mix
//! instead of a full matrix multiply. The sparse tables were derived by
//! repeatedly folding the dense matrix, which is why the middle rounds walk
//! them in reverse order; the indexing here must not be "simplified".

use ark_bls12_377::Fr;
use ark_ff::Field;
use ark_std::Zero;

use crate::params::Parameters;

/// S-box: x^17, as a squaring chain (x^2, x^4, x^8, x^16, then one multiply).
#[inline]
pub(crate) fn sbox(x: Fr) -> Fr {
    let x2 = x.square();
    let x4 = x2.square();
    let x8 = x4.square();
    let x16 = x8.square();
    x16 * x
}

/// Apply the full permutation in place.
///
/// `state.len()` must equal `params.t`; parameters from
/// [`Parameters::for_rate`] are already shape-validated.
pub(crate) fn permute(params: &Parameters, state: &mut [Fr]) {
    debug_assert_eq!(state.len(), params.t);
    let t = params.t;
    let half = params.r_f / 2;

    // First half of the full rounds.
    for row in 0..half {
        add_arc_row(state, &params.arc, row);
        for lane in state.iter_mut() {
            *lane = sbox(*lane);
        }
        mix_dense(state, &params.mds);
    }

    // Transition round: full constant row, dense mix with the optimized
    // matrix when the table carries one.
    add_arc_row(state, &params.arc, half);
    match &params.mi {
        Some(mi) => mix_dense(state, mi),
        None => mix_dense(state, &params.mds),
    }

    // Middle partial rounds: lane 0 only, sparse tables walked in reverse.
    for round in 0..params.r_p - 1 {
        state[0] = sbox(state[0]);
        state[0] += params.arc[(half + 1 + round) * t];
        mix_sparse(state, params, params.r_p - 1 - round);
    }

    // Final partial round: the constant table is exhausted.
    state[0] = sbox(state[0]);
    mix_sparse(state, params, 0);

    // Second half of the full rounds.
    for round in 0..half {
        add_arc_row(state, &params.arc, half + params.r_p + round);
        for lane in state.iter_mut() {
            *lane = sbox(*lane);
        }
        mix_dense(state, &params.mds);
    }
}

fn add_arc_row(state: &mut [Fr], arc: &[Fr], row: usize) {
    let t = state.len();
    for (i, lane) in state.iter_mut().enumerate() {
        *lane += arc[row * t + i];
    }
}

fn mix_dense(state: &mut [Fr], matrix: &[Fr]) {
    let t = state.len();
    let mut next = vec![Fr::zero(); t];
    for (i, out) in next.iter_mut().enumerate() {
        let row = &matrix[i * t..(i + 1) * t];
        for (coeff, lane) in row.iter().zip(state.iter()) {
            *out += *coeff * lane;
        }
    }
    state.copy_from_slice(&next);
}

/// Sparse mix: lane 0 takes a full dot product, every other lane a single
/// rank-1 update from lane 0.
fn mix_sparse(state: &mut [Fr], params: &Parameters, sparse_round: usize) {
    let sub = state.len() - 1;
    let offset = sparse_round * sub;
    let v = &params.sparse_v[offset..offset + sub];
    let w = &params.sparse_w[offset..offset + sub];

    let mut lane0 = params.m00 * state[0];
    for (coeff, lane) in w.iter().zip(state[1..].iter()) {
        lane0 += *coeff * lane;
    }
    let old0 = state[0];
    for (coeff, lane) in v.iter().zip(state[1..].iter_mut()) {
        *lane += *coeff * old0;
    }
    state[0] = lane0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MAX_RATE;

    fn pow17(x: Fr) -> Fr {
        x.pow([17u64])
    }

    #[test]
    fn test_sbox_matches_direct_exponentiation() {
        for v in [0u64, 1, 2, 5, 1234567890123456789] {
            let x = Fr::from(v);
            assert_eq!(sbox(x), pow17(x));
        }
    }

    #[test]
    fn test_permutation_is_deterministic() {
        let params = Parameters::for_rate(2).unwrap();
        let mut a = vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)];
        let mut b = a.clone();
        permute(params, &mut a);
        permute(params, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_permutation_moves_every_lane() {
        for rate in 1..=MAX_RATE {
            let params = Parameters::for_rate(rate).unwrap();
            let mut state = vec![Fr::zero(); params.t];
            permute(params, &mut state);
            for lane in &state {
                assert_ne!(*lane, Fr::zero());
            }
        }
    }

    #[test]
    fn test_transition_round_falls_back_to_dense_mds() {
        // No published table omits the optimized matrix, so exercise the
        // fallback with a synthetic parameter set.
        let with_mi = Parameters::for_rate(2).unwrap();
        let mut without_mi = with_mi.clone();
        without_mi.mi = None;
        without_mi.validate().unwrap();

        let input = vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)];

        let mut a = input.clone();
        let mut b = input.clone();
        permute(&without_mi, &mut a);
        permute(&without_mi, &mut b);
        assert_eq!(a, b);

        let mut c = input.clone();
        permute(with_mi, &mut c);
        assert_ne!(a, c);
    }
}
