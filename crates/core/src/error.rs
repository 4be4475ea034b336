//! Error Types for Poseidon Hashing
//!
//! This module provides the error hierarchy for the hashing library.

use thiserror::Error;

/// Top-level error type for Poseidon operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PoseidonError {
    /// Input count does not match the hasher's configured rate
    #[error("Arity mismatch: expected {expected} inputs, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// Rate outside the supported range 1..=7
    #[error("Unsupported rate: {0} (supported rates: 1-7)")]
    UnsupportedRate(usize),

    /// Malformed field element encoding
    #[error("Invalid field element: {0}")]
    InvalidFieldElement(String),

    /// A declared rate lacks complete or coherent constants
    #[error("Missing or corrupt parameter table for rate {rate}")]
    MissingParameterTable { rate: usize },
}

/// Result type alias for Poseidon operations
pub type PoseidonResult<T> = Result<T, PoseidonError>;
