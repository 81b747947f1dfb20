//! Error types for triweight smoothing
//!
//! Provides a unified error type for all triweight-stats crates.

use thiserror::Error;

/// Core error type for smoothing and histogram operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a sequence that must be strictly increasing
    pub fn not_increasing(context: &str, index: usize) -> Self {
        Self::InvalidInput(format!(
            "{context} must be strictly increasing (violated at index {index})"
        ))
    }

    /// Create an error for a parameter that must be strictly positive
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive, got {value}"))
    }
}
