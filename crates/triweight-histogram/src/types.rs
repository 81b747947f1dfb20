//! Core types for smoothed histogram representation

use crate::edges::BinEdges;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use triweight_core::{validation, Error, Result, ValidationMode};

/// Kernel bandwidth for every sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Bandwidth<F = f64> {
    /// One bandwidth broadcast to all samples
    Uniform(F),
    /// One bandwidth per sample, in sample order
    PerSample(Vec<F>),
}

impl<F: Float> Bandwidth<F> {
    /// Same bandwidth for every sample
    pub fn uniform(h: F) -> Self {
        Self::Uniform(h)
    }

    /// Individual bandwidth for each sample
    pub fn per_sample(h: Vec<F>) -> Self {
        Self::PerSample(h)
    }

    /// Bandwidth of sample `i`
    ///
    /// Panics if a per-sample bandwidth has no entry for `i`; call
    /// [`Bandwidth::check_len`] first.
    #[inline]
    pub fn get(&self, i: usize) -> F {
        match self {
            Self::Uniform(h) => *h,
            Self::PerSample(h) => h[i],
        }
    }

    /// Check that the bandwidth broadcasts against `n_samples` samples
    pub fn check_len(&self, n_samples: usize) -> Result<()> {
        match self {
            Self::Uniform(_) => Ok(()),
            Self::PerSample(h) if h.len() == n_samples => Ok(()),
            Self::PerSample(h) => Err(Error::size_mismatch(n_samples, h.len(), "bandwidth vector")),
        }
    }

    /// Strict-mode check that every bandwidth is finite and positive
    pub fn validate(&self, mode: ValidationMode) -> Result<()> {
        if !mode.is_strict() {
            return Ok(());
        }
        match self {
            Self::Uniform(h) => validation::ensure_positive(*h, "bandwidth"),
            Self::PerSample(h) => h
                .iter()
                .try_for_each(|&v| validation::ensure_positive(v, "bandwidth")),
        }
    }
}

impl<F: Float> From<Vec<F>> for Bandwidth<F> {
    fn from(h: Vec<F>) -> Self {
        Self::PerSample(h)
    }
}

/// Dense row-major matrix of per-sample, per-bin kernel weights
///
/// Entry `(i, j)` is the fraction of sample `i`'s kernel mass inside bin `j`.
/// Rows sum to less than one when mass falls outside the outermost edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawWeightMatrix<F>",
    bound(deserialize = "F: Float + Deserialize<'de>")
)]
pub struct WeightMatrix<F = f64> {
    n_samples: usize,
    n_bins: usize,
    data: Vec<F>,
}

#[derive(Deserialize)]
struct RawWeightMatrix<F> {
    n_samples: usize,
    n_bins: usize,
    data: Vec<F>,
}

impl<F: Float> TryFrom<RawWeightMatrix<F>> for WeightMatrix<F> {
    type Error = Error;

    fn try_from(raw: RawWeightMatrix<F>) -> Result<Self> {
        Self::new(raw.n_samples, raw.n_bins, raw.data)
    }
}

impl<F: Float> WeightMatrix<F> {
    /// Create a matrix from row-major data
    pub fn new(n_samples: usize, n_bins: usize, data: Vec<F>) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::InvalidParameter(
                "weight matrix needs at least one bin".to_string(),
            ));
        }
        if data.len() != n_samples * n_bins {
            return Err(Error::size_mismatch(n_samples * n_bins, data.len(), "weight matrix"));
        }
        Ok(Self {
            n_samples,
            n_bins,
            data,
        })
    }

    /// `(n_samples, n_bins)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_samples, self.n_bins)
    }

    /// Number of rows
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of columns
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Weight of sample `i` in bin `j`
    pub fn get(&self, i: usize, j: usize) -> Option<F> {
        if i < self.n_samples && j < self.n_bins {
            Some(self.data[i * self.n_bins + j])
        } else {
            None
        }
    }

    /// Weights of sample `i` across all bins
    pub fn row(&self, i: usize) -> Option<&[F]> {
        if i < self.n_samples {
            Some(&self.data[i * self.n_bins..(i + 1) * self.n_bins])
        } else {
            None
        }
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[F]> + '_ {
        self.data.chunks_exact(self.n_bins)
    }

    /// Kernel mass retained inside the bins, per sample
    pub fn row_sums(&self) -> Vec<F> {
        self.rows()
            .map(|row| row.iter().fold(F::zero(), |acc, &w| acc + w))
            .collect()
    }

    /// Smoothed count per bin
    pub fn column_sums(&self) -> Vec<F> {
        let mut sums = vec![F::zero(); self.n_bins];
        for row in self.rows() {
            for (sum, &w) in sums.iter_mut().zip(row) {
                *sum = *sum + w;
            }
        }
        sums
    }

    /// Smoothed count per bin with each sample scaled by `sample_weights[i]`
    pub fn weighted_column_sums(&self, sample_weights: &[F]) -> Result<Vec<F>> {
        if sample_weights.len() != self.n_samples {
            return Err(Error::size_mismatch(
                self.n_samples,
                sample_weights.len(),
                "sample weights",
            ));
        }
        let mut sums = vec![F::zero(); self.n_bins];
        for (row, &weight) in self.rows().zip(sample_weights) {
            for (sum, &w) in sums.iter_mut().zip(row) {
                *sum = *sum + weight * w;
            }
        }
        Ok(sums)
    }

    /// Row-major data
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    /// Consume and return row-major data
    pub fn into_vec(self) -> Vec<F> {
        self.data
    }
}

/// A smoothed histogram: bin edges plus the kernel mass landing in each bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawSmoothHistogram<F>",
    bound(deserialize = "F: Float + Deserialize<'de>")
)]
pub struct SmoothHistogram<F = f64> {
    edges: BinEdges<F>,
    counts: Vec<F>,
    /// Total sample weight that was smoothed, including mass outside the edges
    total: F,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "F: Float + Deserialize<'de>"))]
struct RawSmoothHistogram<F> {
    edges: BinEdges<F>,
    counts: Vec<F>,
    total: F,
}

impl<F: Float> TryFrom<RawSmoothHistogram<F>> for SmoothHistogram<F> {
    type Error = Error;

    fn try_from(raw: RawSmoothHistogram<F>) -> Result<Self> {
        Self::new(raw.edges, raw.counts, raw.total)
    }
}

impl<F: Float> SmoothHistogram<F> {
    /// Create a histogram from edges and per-bin counts
    pub fn new(edges: BinEdges<F>, counts: Vec<F>, total: F) -> Result<Self> {
        if counts.len() != edges.num_bins() {
            return Err(Error::size_mismatch(edges.num_bins(), counts.len(), "histogram counts"));
        }
        Ok(Self { edges, counts, total })
    }

    /// Bin edges
    pub fn edges(&self) -> &BinEdges<F> {
        &self.edges
    }

    /// Smoothed count per bin
    pub fn counts(&self) -> &[F] {
        &self.counts
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total sample weight that was smoothed
    pub fn total_count(&self) -> F {
        self.total
    }

    /// Kernel mass that landed inside the bins
    pub fn total_mass(&self) -> F {
        self.counts.iter().fold(F::zero(), |acc, &c| acc + c)
    }

    /// Mass that fell outside the outermost edges
    pub fn lost_mass(&self) -> F {
        self.total - self.total_mass()
    }

    /// count / total per bin
    pub fn frequencies(&self) -> Vec<F> {
        if self.total > F::zero() {
            self.counts.iter().map(|&c| c / self.total).collect()
        } else {
            vec![F::zero(); self.counts.len()]
        }
    }

    /// count / (total * width) per bin
    pub fn densities(&self) -> Vec<F> {
        self.counts
            .iter()
            .zip(self.edges.widths())
            .map(|(&c, width)| {
                if width > F::zero() && self.total > F::zero() {
                    c / (self.total * width)
                } else {
                    F::zero()
                }
            })
            .collect()
    }

    /// Maximum density over all bins
    pub fn max_density(&self) -> F {
        self.densities()
            .into_iter()
            .fold(F::zero(), |acc, d| if d > acc { d } else { acc })
    }

    /// Bin centers
    pub fn centers(&self) -> Vec<F> {
        self.edges.midpoints()
    }

    /// Index of the bin containing `value`
    pub fn find_bin(&self, value: F) -> Option<usize> {
        self.edges.find_bin(value)
    }

    /// Create a normalized copy whose counts sum to one
    ///
    /// Mass lost outside the edges is redistributed proportionally, so the
    /// densities of the result integrate to one.
    pub fn normalize(&self) -> Self {
        let mut normalized = self.clone();
        let mass = self.total_mass();
        if mass > F::zero() {
            for count in &mut normalized.counts {
                *count = *count / mass;
            }
            normalized.total = F::one();
        }
        normalized
    }
}

impl<F: Float + fmt::Display> fmt::Display for SmoothHistogram<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SmoothHistogram({} bins, n={:.3}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total,
            self.edges.lower(),
            self.edges.upper()
        )
    }
}
