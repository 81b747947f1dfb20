//! Configuration for smoothed histogram construction

use serde::{Deserialize, Serialize};
use triweight_core::{ExecutionStrategy, ValidationMode};

/// Default number of samples before `ExecutionStrategy::Auto` goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Parameters controlling how a smoothed histogram is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Input checking before evaluation
    pub validation: ValidationMode,
    /// Sequential, parallel or size-dependent evaluation
    pub strategy: ExecutionStrategy,
    /// Minimum number of samples (matrix rows) for `Auto` to evaluate rows in parallel
    pub parallel_threshold: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Permissive,
            strategy: ExecutionStrategy::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl HistogramConfig {
    /// Default configuration with strict validation
    pub fn strict() -> Self {
        Self::default().with_validation(ValidationMode::Strict)
    }

    /// Set the validation mode
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Set the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the parallel threshold used by `ExecutionStrategy::Auto`
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}
