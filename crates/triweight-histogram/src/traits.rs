//! Core traits for smoothed histogram building

use crate::edges::BinEdges;
use crate::types::{Bandwidth, SmoothHistogram, WeightMatrix};
use num_traits::NumCast;
use triweight_core::{Error, Numeric, Result};

/// Trait for building kernel-smoothed histograms from sample data
pub trait SmoothHistogramBuilder<T: Numeric = f64> {
    /// Weight of every sample in every bin, shape `(samples.len(), edges.num_bins())`
    fn weights(
        &self,
        samples: &[T],
        bandwidth: &Bandwidth<T::Float>,
        edges: &BinEdges<T::Float>,
    ) -> Result<WeightMatrix<T::Float>>;

    /// Smoothed histogram where every sample carries unit weight
    fn build(
        &self,
        samples: &[T],
        bandwidth: &Bandwidth<T::Float>,
        edges: &BinEdges<T::Float>,
    ) -> Result<SmoothHistogram<T::Float>> {
        let matrix = self.weights(samples, bandwidth, edges)?;
        let total = <T::Float as NumCast>::from(samples.len())
            .ok_or_else(|| Error::Computation("sample count overflows float".to_string()))?;
        SmoothHistogram::new(edges.clone(), matrix.column_sums(), total)
    }

    /// Smoothed histogram where sample `i` carries weight `sample_weights[i]`
    fn build_weighted(
        &self,
        samples: &[T],
        sample_weights: &[T::Float],
        bandwidth: &Bandwidth<T::Float>,
        edges: &BinEdges<T::Float>,
    ) -> Result<SmoothHistogram<T::Float>> {
        let matrix = self.weights(samples, bandwidth, edges)?;
        let counts = matrix.weighted_column_sums(sample_weights)?;
        let total = sample_weights
            .iter()
            .fold(<T::Float as num_traits::Zero>::zero(), |acc, &w| acc + w);
        SmoothHistogram::new(edges.clone(), counts, total)
    }
}
