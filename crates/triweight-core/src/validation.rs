//! Input validation for kernel smoothing
//!
//! Smoothing routines are permissive by default: a non-positive bandwidth or
//! unsorted bins flow through as NaN, infinite or negative weights rather than
//! errors. `ValidationMode::Strict` turns those precondition violations into
//! structured errors at the cost of an extra pass over the inputs.

use crate::{Error, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How strictly inputs are checked before evaluation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Only shape checks needed to avoid out-of-range indexing
    #[default]
    Permissive,
    /// Reject non-finite values, non-positive bandwidths and unsorted sequences
    Strict,
}

impl ValidationMode {
    /// Whether value-level checks are enabled
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Require at least `expected` elements
pub fn ensure_min_len<F>(values: &[F], expected: usize) -> Result<()> {
    if values.len() < expected {
        return Err(Error::InsufficientData {
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Require every value to be finite
pub fn ensure_finite<F: Float>(values: &[F], context: &str) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        warn!(context, "non-finite input rejected");
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Require `values[i] < values[i + 1]` for every adjacent pair
pub fn ensure_strictly_increasing<F: Float>(values: &[F], context: &str) -> Result<()> {
    if let Some(i) = values.windows(2).position(|w| !(w[0] < w[1])) {
        warn!(context, index = i + 1, "non-increasing sequence rejected");
        return Err(Error::not_increasing(context, i + 1));
    }
    Ok(())
}

/// Require a finite, strictly positive scalar
pub fn ensure_positive<F: Float>(value: F, name: &str) -> Result<()> {
    if !(value.is_finite() && value > F::zero()) {
        let shown = value.to_f64().unwrap_or(f64::NAN);
        warn!(name, value = shown, "non-positive parameter rejected");
        return Err(Error::non_positive(name, shown));
    }
    Ok(())
}
