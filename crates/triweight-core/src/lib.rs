//! Core types for triweight kernel smoothing
//!
//! This crate provides the pieces shared by the smoothing crates:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Numeric`]: sample types that can be converted to floating point
//! - [`ExecutionEngine`]: sequential or Rayon-backed batch evaluation
//! - [`ValidationMode`]: permissive or strict input checking
//!
//! # Example
//!
//! ```rust
//! use triweight_core::{execution::sequential, ExecutionEngine};
//!
//! let engine = sequential();
//! let rows = engine.execute_batch(3, |i| i as f64 * 0.5);
//! assert_eq!(rows, vec![0.0, 0.5, 1.0]);
//! ```

pub mod error;
pub mod execution;
pub mod numeric;
pub mod validation;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{
    auto_engine, sequential, AutoEngine, ExecutionEngine, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use numeric::Numeric;
pub use validation::ValidationMode;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, ExecutionEngine, ExecutionStrategy, Numeric, Result, SequentialEngine,
        ValidationMode,
    };
}
