//! Poseidon Parameter Tables
//!
//! Each supported rate carries a precomputed table set: round constants in
//! the optimized layout, the dense MDS matrix, the optimized transition
//! matrix, the sparse mixing collections, and the corner scalar. The tables
//! are a fixed, versioned data asset; changing any entry changes every
//! digest this crate produces.

use std::sync::OnceLock;

use ark_bls12_377::Fr;

use crate::error::{PoseidonError, PoseidonResult};

mod source;

/// Highest rate with a parameter table
pub const MAX_RATE: usize = 7;

/// Number of full rounds, split evenly around the partial rounds
pub const FULL_ROUNDS: usize = 8;

/// Validated parameters for one rate.
///
/// State width is `t = rate + 1`; the extra lane carries the domain tag.
#[derive(Clone, Debug)]
pub struct Parameters {
    /// Number of field elements absorbed per permutation call
    pub rate: usize,
    /// State width
    pub t: usize,
    /// Number of full rounds
    pub r_f: usize,
    /// Number of partial rounds
    pub r_p: usize,
    /// Round constants, row-major `(r_f + r_p) x t`, optimized layout
    pub arc: Vec<Fr>,
    /// Dense MDS matrix, row-major `t x t`
    pub mds: Vec<Fr>,
    /// Optimized matrix for the transition round, row-major `t x t`
    pub mi: Option<Vec<Fr>>,
    /// Sparse column vectors, `r_p` runs of `t - 1` entries
    pub sparse_v: Vec<Fr>,
    /// Sparse row vectors, `r_p` runs of `t - 1` entries
    pub sparse_w: Vec<Fr>,
    /// Corner scalar of every sparse matrix
    pub m00: Fr,
}

impl Parameters {
    /// Shared parameters for the given rate, built on first use and cached
    /// for the lifetime of the process.
    pub fn for_rate(rate: usize) -> PoseidonResult<&'static Parameters> {
        static CACHE: [OnceLock<Parameters>; MAX_RATE] = [
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
        ];

        if rate < 1 || rate > MAX_RATE {
            return Err(PoseidonError::UnsupportedRate(rate));
        }
        let cell = &CACHE[rate - 1];
        if let Some(params) = cell.get() {
            return Ok(params);
        }
        // Racing builders produce identical values; the loser is dropped.
        let built = source::load(rate)?;
        Ok(cell.get_or_init(|| built))
    }

    /// Check every table length against the declared `t`, `r_f`, `r_p`.
    pub(crate) fn validate(&self) -> PoseidonResult<()> {
        let defect = || PoseidonError::MissingParameterTable { rate: self.rate };
        if self.t != self.rate + 1 || self.r_f % 2 != 0 || self.r_p == 0 {
            return Err(defect());
        }
        if self.arc.len() != self.t * (self.r_f + self.r_p) {
            return Err(defect());
        }
        if self.mds.len() != self.t * self.t {
            return Err(defect());
        }
        if let Some(mi) = &self.mi {
            if mi.len() != self.t * self.t {
                return Err(defect());
            }
        }
        let sparse_len = (self.t - 1) * self.r_p;
        if self.sparse_v.len() != sparse_len || self.sparse_w.len() != sparse_len {
            return Err(defect());
        }
        Ok(())
    }
}
