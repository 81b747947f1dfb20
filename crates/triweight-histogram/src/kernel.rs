//! Triweight kernel primitives
//!
//! The triweight kernel `K(u) = 35/32 (1 - u²)³` on `[-1, 1]`, rescaled to the
//! interval `[-3, 3]`, has a cumulative integral that is an odd degree-7
//! polynomial. That polynomial is a compactly supported, C²-smooth stand-in for
//! the unit step: exactly 0 below `-3h`, exactly 1 above `+3h`.
//!
//! Everything else in this crate is built from [`triweight_cdf`].

use num_traits::Float;
use serde::{Deserialize, Serialize};
use triweight_core::{validation, Result};

/// Half-width of the kernel support in units of bandwidth
pub const SUPPORT_HALF_WIDTH: f64 = 3.0;

/// Ratio between a logistic steepness `k` and the inverse triweight bandwidth
pub const STEEPNESS_TO_BANDWIDTH: f64 = 0.614;

#[inline]
fn constant<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// Smooth step: cumulative triweight kernel centered at `m` with bandwidth `h`
///
/// Returns a value in `[0, 1]` that is non-decreasing in `x`. A bandwidth
/// `h <= 0` is a precondition violation and yields NaN or a hard step.
#[inline]
pub fn triweight_cdf<F: Float>(x: F, m: F, h: F) -> F {
    let z = (x - m) / h;
    let three = constant::<F>(SUPPORT_HALF_WIDTH);
    if z <= -three {
        return F::zero();
    }
    if z >= three {
        return F::one();
    }

    // -5z⁷/69984 + 7z⁵/2592 - 35z³/864 + 35z/96 + 1/2, in Horner form
    let z2 = z * z;
    let c7 = constant::<F>(-5.0 / 69984.0);
    let c5 = constant::<F>(7.0 / 2592.0);
    let c3 = constant::<F>(-35.0 / 864.0);
    let c1 = constant::<F>(35.0 / 96.0);
    let half = constant::<F>(0.5);
    z * (c1 + z2 * (c3 + z2 * (c5 + z2 * c7))) + half
}

/// Evaluate [`triweight_cdf`] at every point of `xs`
pub fn triweight_cdf_slice<F: Float>(xs: &[F], m: F, h: F) -> Vec<F> {
    xs.iter().map(|&x| triweight_cdf(x, m, h)).collect()
}

/// Smooth step rescaled to run from `ymin` to `ymax`
///
/// Equals `(ymin + ymax) / 2` at `x == x0`. If `ymin > ymax` the curve
/// decreases.
#[inline]
pub fn triweight_sigmoid<F: Float>(x: F, x0: F, tw_h: F, ymin: F, ymax: F) -> F {
    ymin + (ymax - ymin) * triweight_cdf(x, x0, tw_h)
}

/// Convert a logistic-style steepness `k` into a triweight bandwidth
///
/// `k` must be positive; `k == 0` returns infinity.
#[inline]
pub fn bandwidth_from_steepness<F: Float>(k: F) -> F {
    F::one() / (constant::<F>(STEEPNESS_TO_BANDWIDTH) * k)
}

/// [`bandwidth_from_steepness`] that rejects non-positive or non-finite `k`
pub fn bandwidth_from_steepness_checked<F: Float>(k: F) -> Result<F> {
    validation::ensure_positive(k, "steepness")?;
    Ok(bandwidth_from_steepness(k))
}

/// Mass of a triweight kernel centered at `x` with bandwidth `sig` inside `[lo, hi]`
///
/// The caller must supply `lo < hi`; reversed edges give a negative weight.
#[inline]
pub fn bin_weight<F: Float>(x: F, sig: F, lo: F, hi: F) -> F {
    triweight_cdf(x, lo, sig) - triweight_cdf(x, hi, sig)
}

/// A triweight sigmoid with fixed parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriweightSigmoid<F = f64> {
    /// Midpoint of the transition
    pub x0: F,
    /// Kernel bandwidth; the transition spans `x0 ± 3 * bandwidth`
    pub bandwidth: F,
    /// Value far below `x0`
    pub ymin: F,
    /// Value far above `x0`
    pub ymax: F,
}

impl<F: Float> TriweightSigmoid<F> {
    /// Create a sigmoid from a bandwidth
    pub fn new(x0: F, bandwidth: F, ymin: F, ymax: F) -> Self {
        Self {
            x0,
            bandwidth,
            ymin,
            ymax,
        }
    }

    /// Create a sigmoid from a logistic-style steepness
    pub fn from_steepness(x0: F, k: F, ymin: F, ymax: F) -> Self {
        Self::new(x0, bandwidth_from_steepness(k), ymin, ymax)
    }

    /// Evaluate at a single point
    #[inline]
    pub fn evaluate(&self, x: F) -> F {
        triweight_sigmoid(x, self.x0, self.bandwidth, self.ymin, self.ymax)
    }

    /// Evaluate at every point of `xs`
    pub fn evaluate_slice(&self, xs: &[F]) -> Vec<F> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Interval outside of which the sigmoid is flat
    pub fn transition(&self) -> (F, F) {
        let reach = constant::<F>(SUPPORT_HALF_WIDTH) * self.bandwidth;
        (self.x0 - reach, self.x0 + reach)
    }
}
