//! Differentiable histograms built from a triweight kernel
//!
//! Instead of counting each sample into exactly one bin, every sample is spread
//! over a compactly supported triweight kernel and contributes the fraction of
//! its kernel mass that falls inside each bin. The resulting weights vary
//! smoothly with sample positions, bandwidths and bin edges.
//!
//! # Key Features
//!
//! - **Smooth step**: [`triweight_cdf`], a C²-smooth step that is exactly 0/1
//!   outside `±3h`
//! - **Smooth sigmoid**: [`triweight_sigmoid`] and [`TriweightSigmoid`], with
//!   [`bandwidth_from_steepness`] for logistic-style parameterization
//! - **Bin edges from midpoints**: [`bin_edges`] / [`BinEdges::from_midpoints`]
//! - **Batched weights**: [`triweighted_histogram`] and
//!   [`TriweightHistogramBuilder`] produce a dense sample × bin matrix
//!
//! # Examples
//!
//! ## Weight matrix from explicit edges
//!
//! ```rust
//! use triweight_histogram::triweighted_histogram;
//!
//! let x = [0.5f64, 1.5];
//! let sig = [0.1, 0.1];
//! let xbins = [0.0, 1.0, 2.0];
//!
//! let weights = triweighted_histogram(&x[..], &sig[..], &xbins[..]).unwrap();
//! assert_eq!(weights.shape(), (2, 2));
//! assert!((weights.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
//! assert!(weights.get(0, 1).unwrap().abs() < 1e-12);
//! ```
//!
//! ## Smoothed histogram over bins derived from midpoints
//!
//! ```rust
//! use triweight_histogram::{smooth_histogram, Bandwidth, BinEdges};
//!
//! let edges = BinEdges::from_midpoints(&[1.0, 2.0, 3.0], 0.5, 3.5).unwrap();
//! assert_eq!(edges.as_slice(), &[0.5, 1.5, 2.5, 3.5]);
//!
//! let samples = [1.0f64, 1.2, 2.9, 3.0];
//! let hist = smooth_histogram(&samples[..], &Bandwidth::uniform(0.05), &edges).unwrap();
//! println!("{hist}");
//! assert_eq!(hist.len(), 3);
//! ```
//!
//! ## Configured builder
//!
//! ```rust
//! use triweight_histogram::{
//!     Bandwidth, BinEdges, HistogramConfig, SmoothHistogramBuilder, TriweightHistogramBuilder,
//! };
//!
//! let builder = TriweightHistogramBuilder::with_config(HistogramConfig::strict());
//! let edges = BinEdges::uniform(0.0, 1.0, 4).unwrap();
//!
//! // Non-positive bandwidths are rejected in strict mode
//! let result = builder.weights(&[0.5f64][..], &Bandwidth::uniform(0.0), &edges);
//! assert!(result.is_err());
//! ```

pub mod builders;
pub mod config;
pub mod edges;
pub mod kernel;
pub mod spacing;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::TriweightHistogramBuilder;
pub use config::HistogramConfig;
pub use edges::{bin_edges, bin_edges_with, BinEdges};
pub use kernel::{
    bandwidth_from_steepness, bandwidth_from_steepness_checked, bin_weight, triweight_cdf,
    triweight_cdf_slice, triweight_sigmoid, TriweightSigmoid,
};
pub use spacing::{spacing, spacing_with};
pub use traits::SmoothHistogramBuilder;
pub use types::{Bandwidth, SmoothHistogram, WeightMatrix};

pub use triweight_core::{Error, Numeric, Result};

// Convenience functions
/// Weight of every sample in every bin
///
/// `sig` holds one bandwidth per sample, or a single bandwidth shared by all
/// samples. `xbins` holds `n + 1` edges for `n` bins and should be strictly
/// increasing.
pub fn triweighted_histogram<T: Numeric>(
    x: &[T],
    sig: &[T::Float],
    xbins: &[T::Float],
) -> Result<WeightMatrix<T::Float>> {
    let bandwidth = match sig {
        [h] => Bandwidth::uniform(*h),
        _ => Bandwidth::per_sample(sig.to_vec()),
    };
    let edges = BinEdges::from_edges(xbins.to_vec())?;
    TriweightHistogramBuilder::new().weights(x, &bandwidth, &edges)
}

/// Smoothed histogram of `x` with default configuration
pub fn smooth_histogram<T: Numeric>(
    x: &[T],
    bandwidth: &Bandwidth<T::Float>,
    edges: &BinEdges<T::Float>,
) -> Result<SmoothHistogram<T::Float>> {
    TriweightHistogramBuilder::new().build(x, bandwidth, edges)
}
