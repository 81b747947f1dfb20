//! Triweight kernel smoothing toolkit
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`triweight_core`]: error type, numeric trait, execution engines, validation mode
//! - [`triweight_histogram`]: smooth step, sigmoid, bin edges and batched kernel histograms
//!
//! # Example
//!
//! ```rust
//! use triweight_stats::prelude::*;
//!
//! let edges = BinEdges::from_midpoints(&[0.0, 1.0, 2.0, 3.0], -0.5, 3.5)?;
//! let samples = [0.1f64, 0.9, 1.1, 2.5];
//! let hist = smooth_histogram(&samples[..], &Bandwidth::uniform(0.1), &edges)?;
//! assert_eq!(hist.len(), 4);
//! # Ok::<(), triweight_stats::Error>(())
//! ```

pub use triweight_core;
pub use triweight_histogram;

pub use triweight_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use triweight_core::prelude::*;
    pub use triweight_histogram::{
        bandwidth_from_steepness, bin_edges, smooth_histogram, triweight_cdf, triweight_sigmoid,
        triweighted_histogram, Bandwidth, BinEdges, HistogramConfig, SmoothHistogram,
        SmoothHistogramBuilder, TriweightHistogramBuilder, TriweightSigmoid, WeightMatrix,
    };
}
