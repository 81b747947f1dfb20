//! Bin edges derived from bin midpoints

use crate::spacing::spacing_with;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use triweight_core::{validation, Error, Result, ValidationMode};

/// Edges of the bins centered on `bin_mids`
///
/// Returns `n + 1` edges for `n` midpoints. Each inner edge sits half a local
/// spacing below its midpoint; the outermost edges are replaced by
/// `lowest_bin_edge` and `highest_bin_edge` unconditionally. Bounds that are
/// inconsistent with the midpoints are passed through (see [`bin_edges_with`]).
pub fn bin_edges<F: Float>(
    bin_mids: &[F],
    lowest_bin_edge: F,
    highest_bin_edge: F,
) -> Result<Vec<F>> {
    bin_edges_with(bin_mids, lowest_bin_edge, highest_bin_edge, ValidationMode::Permissive)
}

/// [`bin_edges`] with optional strict checks
///
/// In strict mode the midpoints must be finite and strictly increasing, and
/// the resulting edges (including both bounds) must be strictly increasing.
pub fn bin_edges_with<F: Float>(
    bin_mids: &[F],
    lowest_bin_edge: F,
    highest_bin_edge: F,
    mode: ValidationMode,
) -> Result<Vec<F>> {
    let dbins = spacing_with(bin_mids, mode)?;
    let half = F::from(0.5).unwrap_or_else(F::nan);

    let mut edges = Vec::with_capacity(bin_mids.len() + 1);
    edges.extend(bin_mids.iter().zip(&dbins).map(|(&mid, &d)| mid - d * half));
    edges.push(highest_bin_edge);
    edges[0] = lowest_bin_edge;

    if mode.is_strict() {
        validation::ensure_finite(&edges, "bin edges")?;
        validation::ensure_strictly_increasing(&edges, "bin edges")?;
    }

    Ok(edges)
}

/// An ordered set of bin edges defining `len() - 1` contiguous bins
///
/// Deserialization goes through [`BinEdges::from_edges`], so fewer than two
/// edges are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawBinEdges<F>",
    bound(deserialize = "F: Float + Deserialize<'de>")
)]
pub struct BinEdges<F = f64> {
    edges: Vec<F>,
}

#[derive(Deserialize)]
struct RawBinEdges<F> {
    edges: Vec<F>,
}

impl<F: Float> TryFrom<RawBinEdges<F>> for BinEdges<F> {
    type Error = Error;

    fn try_from(raw: RawBinEdges<F>) -> Result<Self> {
        Self::from_edges(raw.edges)
    }
}

impl<F: Float> BinEdges<F> {
    /// Wrap explicit edges; at least two are needed to form a bin
    pub fn from_edges(edges: Vec<F>) -> Result<Self> {
        Self::from_edges_with(edges, ValidationMode::Permissive)
    }

    /// Wrap explicit edges, checking ordering in strict mode
    pub fn from_edges_with(edges: Vec<F>, mode: ValidationMode) -> Result<Self> {
        validation::ensure_min_len(&edges, 2)?;
        if mode.is_strict() {
            validation::ensure_finite(&edges, "bin edges")?;
            validation::ensure_strictly_increasing(&edges, "bin edges")?;
        }
        Ok(Self { edges })
    }

    /// Derive edges from bin midpoints and explicit outer bounds
    pub fn from_midpoints(
        bin_mids: &[F],
        lowest_bin_edge: F,
        highest_bin_edge: F,
    ) -> Result<Self> {
        Self::from_midpoints_with(
            bin_mids,
            lowest_bin_edge,
            highest_bin_edge,
            ValidationMode::Permissive,
        )
    }

    /// Derive edges from bin midpoints, with optional strict checks
    pub fn from_midpoints_with(
        bin_mids: &[F],
        lowest_bin_edge: F,
        highest_bin_edge: F,
        mode: ValidationMode,
    ) -> Result<Self> {
        let edges = bin_edges_with(bin_mids, lowest_bin_edge, highest_bin_edge, mode)?;
        Ok(Self { edges })
    }

    /// Evenly spaced edges covering `[lower, upper]` with `num_bins` bins
    pub fn uniform(lower: F, upper: F, num_bins: usize) -> Result<Self> {
        if num_bins == 0 {
            return Err(Error::InvalidParameter(
                "uniform bin edges need at least one bin".to_string(),
            ));
        }
        let n = F::from(num_bins).unwrap_or_else(F::nan);
        let width = (upper - lower) / n;
        let mut edges: Vec<F> = (0..num_bins)
            .map(|i| lower + F::from(i).unwrap_or_else(F::nan) * width)
            .collect();
        // Ensure the last edge is exactly `upper`
        edges.push(upper);
        Self::from_edges(edges)
    }

    /// Number of bins
    pub fn num_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether there are no edges; never true for a constructed value
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The edges as a slice
    pub fn as_slice(&self) -> &[F] {
        &self.edges
    }

    /// Lowest edge
    pub fn lower(&self) -> F {
        self.edges[0]
    }

    /// Highest edge
    pub fn upper(&self) -> F {
        self.edges[self.edges.len() - 1]
    }

    /// `(lo, hi)` of bin `j`
    pub fn bounds(&self, j: usize) -> Option<(F, F)> {
        if j + 1 < self.edges.len() {
            Some((self.edges[j], self.edges[j + 1]))
        } else {
            None
        }
    }

    /// Iterate over `(lo, hi)` for every bin
    pub fn iter_bounds(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.edges.windows(2).map(|w| (w[0], w[1]))
    }

    /// Width of every bin
    pub fn widths(&self) -> Vec<F> {
        self.iter_bounds().map(|(lo, hi)| hi - lo).collect()
    }

    /// Pairwise average of adjacent edges
    ///
    /// For edges built by [`BinEdges::from_midpoints`] this approximately
    /// reproduces the interior midpoints (exactly, on a uniform grid); the two
    /// outer bins reflect the supplied bounds.
    pub fn midpoints(&self) -> Vec<F> {
        let half = F::from(0.5).unwrap_or_else(F::nan);
        self.iter_bounds().map(|(lo, hi)| half * (lo + hi)).collect()
    }

    /// Index of the bin containing `value`
    ///
    /// Bins are half-open `[lo, hi)` except the last, which includes `hi`.
    pub fn find_bin(&self, value: F) -> Option<usize> {
        if value == self.upper() {
            return Some(self.num_bins() - 1);
        }
        self.iter_bounds()
            .position(|(lo, hi)| value >= lo && value < hi)
    }

    /// Whether every edge is strictly above the previous one
    pub fn is_strictly_increasing(&self) -> bool {
        self.edges.windows(2).all(|w| w[0] < w[1])
    }

    /// Consume and return the raw edges
    pub fn into_vec(self) -> Vec<F> {
        self.edges
    }
}

impl<F> AsRef<[F]> for BinEdges<F> {
    fn as_ref(&self) -> &[F] {
        &self.edges
    }
}
