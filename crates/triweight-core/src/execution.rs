//! Execution engines for controlling computation strategy
//!
//! Batched kernel evaluation is embarrassingly parallel over the sample
//! dimension. An execution engine decides whether those independent rows are
//! produced in the current thread or fanned out over a Rayon pool. The choice
//! never changes results or their ordering.

use serde::{Deserialize, Serialize};
#[cfg(feature = "parallel")]
use crate::Result;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
    /// Automatically choose based on workload
    #[default]
    Auto,
}

/// Trait for execution engines that control how batches are evaluated
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Evaluate `f` for every index in `0..count`, preserving index order
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(
            self.strategy(),
            ExecutionStrategy::Parallel | ExecutionStrategy::Auto
        )
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    /// Create a new sequential engine
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for SequentialEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's global pool, or a
/// dedicated pool when one is supplied.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a new parallel engine with default thread pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Engine that picks sequential or parallel evaluation per batch
///
/// Batches smaller than `threshold` work items run in the calling thread;
/// thread hand-off costs more than it saves on small matrices. Without the
/// `parallel` feature every batch runs sequentially.
#[derive(Clone, Debug)]
pub struct AutoEngine {
    strategy: ExecutionStrategy,
    threshold: usize,
    #[cfg(feature = "parallel")]
    parallel: ParallelEngine,
}

impl AutoEngine {
    /// Create an auto engine that parallelizes batches of at least `threshold` items
    pub fn new(threshold: usize) -> Self {
        Self::for_strategy(ExecutionStrategy::Auto, threshold)
    }

    /// Create an engine honoring a configured strategy
    ///
    /// `Sequential` never fans out and `Parallel` always does (when the
    /// `parallel` feature is enabled); `threshold` only applies to `Auto`.
    pub fn for_strategy(strategy: ExecutionStrategy, threshold: usize) -> Self {
        let threshold = match strategy {
            ExecutionStrategy::Sequential => usize::MAX,
            ExecutionStrategy::Parallel => 0,
            ExecutionStrategy::Auto => threshold,
        };
        Self {
            strategy,
            threshold,
            #[cfg(feature = "parallel")]
            parallel: ParallelEngine::new(),
        }
    }

    /// Minimum batch size that is evaluated in parallel
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether a batch of `work` items would be evaluated in parallel
    pub fn goes_parallel(&self, work: usize) -> bool {
        cfg!(feature = "parallel") && work >= self.threshold
    }
}

impl ExecutionEngine for AutoEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "parallel")]
        {
            if self.goes_parallel(count) {
                return self.parallel.execute_batch(count, f);
            }
        }
        SequentialEngine.execute_batch(count, f)
    }

    fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    fn num_threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.parallel.num_threads()
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }
}

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine::new()
}

/// Create a parallel engine on Rayon's global pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}

/// Create an engine that parallelizes batches of at least `threshold` items
pub fn auto_engine(threshold: usize) -> AutoEngine {
    AutoEngine::new(threshold)
}
