//! Local sampling intervals of an ordered position array

use num_traits::Float;
use triweight_core::{validation, Result, ValidationMode};

/// Local spacing `dt[i]` around each position `t[i]`
///
/// Interior entries are the distance between the midpoints of the two gaps
/// adjacent to `t[i]`. The first entry is the first gap. The last entry
/// extrapolates half of the last interior midpoint difference past `t[n-1]`.
///
/// With exactly two positions there is no interior difference and the single
/// gap is used for both entries. Fewer than two positions is an error.
///
/// Positions should be strictly increasing; this is not checked here (see
/// [`spacing_with`]).
pub fn spacing<F: Float>(t: &[F]) -> Result<Vec<F>> {
    validation::ensure_min_len(t, 2)?;

    let n = t.len();
    let half = F::from(0.5).unwrap_or_else(F::nan);

    let tmids: Vec<F> = t.windows(2).map(|w| half * (w[0] + w[1])).collect();
    let dtmids: Vec<F> = tmids.windows(2).map(|w| w[1] - w[0]).collect();

    let mut dt = vec![F::zero(); n];
    dt[1..n - 1].copy_from_slice(&dtmids);

    let first_gap = t[1] - t[0];
    let t_lo = t[0] - first_gap * half;
    dt[0] = tmids[0] - t_lo;

    let last_gap = dtmids.last().copied().unwrap_or(first_gap);
    let t_hi = t[n - 1] + last_gap * half;
    dt[n - 1] = t_hi - tmids[n - 2];

    Ok(dt)
}

/// [`spacing`] with optional strict checks on the positions
pub fn spacing_with<F: Float>(t: &[F], mode: ValidationMode) -> Result<Vec<F>> {
    if mode.is_strict() {
        validation::ensure_finite(t, "positions")?;
        validation::ensure_strictly_increasing(t, "positions")?;
    }
    spacing(t)
}
