//! Batched triweight histogram construction

use crate::config::HistogramConfig;
use crate::edges::BinEdges;
use crate::kernel::triweight_cdf;
use crate::traits::SmoothHistogramBuilder;
use crate::types::{Bandwidth, WeightMatrix};
use tracing::{debug, instrument};
use triweight_core::{validation, AutoEngine, Error, ExecutionEngine, Numeric, Result};

/// Builds triweight weight matrices, pairing every sample with every bin
///
/// Rows are independent, so the engine may evaluate them in parallel; the
/// result is identical to sequential evaluation.
#[derive(Debug, Clone)]
pub struct TriweightHistogramBuilder<E = AutoEngine> {
    config: HistogramConfig,
    engine: E,
}

impl TriweightHistogramBuilder<AutoEngine> {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::with_config(HistogramConfig::default())
    }

    /// Create a builder whose engine follows `config.strategy`
    pub fn with_config(config: HistogramConfig) -> Self {
        Self {
            config,
            engine: AutoEngine::for_strategy(config.strategy, config.parallel_threshold),
        }
    }
}

impl Default for TriweightHistogramBuilder<AutoEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ExecutionEngine> TriweightHistogramBuilder<E> {
    /// Replace the execution engine, e.g. with a dedicated thread pool
    pub fn with_engine<E2: ExecutionEngine>(self, engine: E2) -> TriweightHistogramBuilder<E2> {
        TriweightHistogramBuilder {
            config: self.config,
            engine,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    /// Active engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn validate<T: Numeric>(
        &self,
        samples: &[T],
        bandwidth: &Bandwidth<T::Float>,
        edges: &BinEdges<T::Float>,
    ) -> Result<()> {
        bandwidth.check_len(samples.len())?;
        if !self.config.validation.is_strict() {
            return Ok(());
        }
        if samples.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("samples"));
        }
        bandwidth.validate(self.config.validation)?;
        validation::ensure_finite(edges.as_slice(), "bin edges")?;
        validation::ensure_strictly_increasing(edges.as_slice(), "bin edges")
    }
}

impl<T, E> SmoothHistogramBuilder<T> for TriweightHistogramBuilder<E>
where
    T: Numeric,
    E: ExecutionEngine,
{
    #[instrument(
        level = "debug",
        skip_all,
        fields(n_samples = samples.len(), n_bins = edges.num_bins())
    )]
    fn weights(
        &self,
        samples: &[T],
        bandwidth: &Bandwidth<T::Float>,
        edges: &BinEdges<T::Float>,
    ) -> Result<WeightMatrix<T::Float>> {
        self.validate(samples, bandwidth, edges)?;

        let n_samples = samples.len();
        let n_bins = edges.num_bins();
        let xbins = edges.as_slice();

        let rows = self.engine.execute_batch(n_samples, |i| {
            let x = samples[i].to_float();
            let sig = bandwidth.get(i);
            // Each edge is evaluated once; bin j is cdf(lo_j) - cdf(hi_j)
            let cdf: Vec<T::Float> = xbins
                .iter()
                .map(|&edge| triweight_cdf(x, edge, sig))
                .collect();
            cdf.windows(2).map(|w| w[0] - w[1]).collect::<Vec<_>>()
        });

        let mut data = Vec::with_capacity(n_samples * n_bins);
        for row in rows {
            data.extend(row);
        }

        debug!(
            strategy = ?self.engine.strategy(),
            threads = self.engine.num_threads(),
            "built triweight weight matrix"
        );
        WeightMatrix::new(n_samples, n_bins, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::bin_weight;
    use approx::assert_relative_eq;
    use triweight_core::{sequential, ExecutionStrategy, ValidationMode};

    fn edges(values: &[f64]) -> BinEdges<f64> {
        BinEdges::from_edges(values.to_vec()).unwrap()
    }

    #[test]
    fn test_matrix_shape_and_entries() {
        let builder = TriweightHistogramBuilder::new();
        let samples = [0.2f64, 1.7, 2.5];
        let bw = Bandwidth::per_sample(vec![0.3, 0.5, 0.1]);
        let bins = edges(&[0.0, 1.0, 2.0, 3.0, 4.0]);

        let matrix = builder.weights(&samples[..], &bw, &bins).unwrap();
        assert_eq!(matrix.shape(), (3, 4));

        for (i, &x) in samples.iter().enumerate() {
            for j in 0..4 {
                let (lo, hi) = bins.bounds(j).unwrap();
                let expected = bin_weight(x, bw.get(i), lo, hi);
                assert_relative_eq!(matrix.get(i, j).unwrap(), expected, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_row_sums_when_edges_cover_support() {
        let builder = TriweightHistogramBuilder::new();
        let samples = [4.0f64, 5.0, 6.0];
        let bins = edges(&[0.0, 3.0, 4.5, 5.2, 7.0, 10.0]);
        let matrix = builder
            .weights(&samples[..], &Bandwidth::uniform(0.4), &bins)
            .unwrap();
        for sum in matrix.row_sums() {
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mass_lost_outside_edges() {
        let builder = TriweightHistogramBuilder::new();
        // sample sits on the upper edge: half its mass falls outside
        let matrix = builder
            .weights(&[10.0f64][..], &Bandwidth::uniform(1.0), &edges(&[0.0, 5.0, 10.0]))
            .unwrap();
        assert_relative_eq!(matrix.row_sums()[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_integer_samples() {
        let builder = TriweightHistogramBuilder::new();
        let matrix = builder
            .weights(&[1i32, 2, 3][..], &Bandwidth::uniform(0.1), &edges(&[0.5, 1.5, 2.5, 3.5]))
            .unwrap();
        for i in 0..3 {
            assert_relative_eq!(matrix.get(i, i).unwrap(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bandwidth_length_mismatch() {
        let builder = TriweightHistogramBuilder::new();
        let bw = Bandwidth::per_sample(vec![0.1]);
        let result = builder.weights(&[1.0f64, 2.0][..], &bw, &edges(&[0.0, 3.0]));
        assert!(result.is_err());
    }

    #[test]
    fn test_permissive_allows_bad_bandwidth() {
        let builder = TriweightHistogramBuilder::new();
        let matrix = builder
            .weights(&[1.0f64][..], &Bandwidth::uniform(0.0), &edges(&[0.0, 0.5, 3.0]))
            .unwrap();
        assert_eq!(matrix.shape(), (1, 2));
    }

    #[test]
    fn test_strict_validation() {
        let builder = TriweightHistogramBuilder::with_config(HistogramConfig::strict());
        let good = edges(&[0.0, 1.0, 2.0]);

        assert!(builder.weights(&[0.5f64][..], &Bandwidth::uniform(0.1), &good).is_ok());
        assert!(builder.weights(&[0.5f64][..], &Bandwidth::uniform(0.0), &good).is_err());
        assert!(matches!(
            builder.weights(&[f64::NAN][..], &Bandwidth::uniform(0.1), &good),
            Err(Error::InvalidInput(_))
        ));
        assert!(builder
            .weights(&[0.5f64][..], &Bandwidth::uniform(0.1), &edges(&[0.0, 2.0, 1.0]))
            .is_err());
    }

    #[test]
    fn test_strategies_agree() {
        let samples: Vec<f64> = (0..500).map(|i| (i as f64) * 0.02).collect();
        let bw = Bandwidth::uniform(0.15);
        let bins = BinEdges::uniform(0.0, 10.0, 25).unwrap();

        let sequential_builder = TriweightHistogramBuilder::with_config(
            HistogramConfig::default().with_strategy(ExecutionStrategy::Sequential),
        );
        let parallel_builder = TriweightHistogramBuilder::with_config(
            HistogramConfig::default()
                .with_strategy(ExecutionStrategy::Parallel)
                .with_validation(ValidationMode::Strict),
        );
        let custom = TriweightHistogramBuilder::new().with_engine(sequential());

        let a = sequential_builder.weights(&samples[..], &bw, &bins).unwrap();
        let b = parallel_builder.weights(&samples[..], &bw, &bins).unwrap();
        let c = custom.weights(&samples[..], &bw, &bins).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(custom.engine().strategy(), ExecutionStrategy::Sequential);
    }

    #[test]
    fn test_build_histogram() {
        let builder = TriweightHistogramBuilder::new();
        let samples = [1.0f64, 1.1, 2.9, 5.0];
        let bins = edges(&[0.0, 2.0, 4.0]);
        let hist = builder.build(&samples[..], &Bandwidth::uniform(0.2), &bins).unwrap();

        assert_eq!(hist.total_count(), 4.0);
        assert_relative_eq!(hist.counts()[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(hist.counts()[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(hist.lost_mass(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_build_weighted_histogram() {
        let builder = TriweightHistogramBuilder::new();
        let bins = edges(&[0.0, 2.0, 4.0]);
        let hist = builder
            .build_weighted(&[1.0f64, 3.0][..], &[0.25, 0.75], &Bandwidth::uniform(0.1), &bins)
            .unwrap();
        assert_relative_eq!(hist.total_count(), 1.0);
        assert_relative_eq!(hist.counts()[0], 0.25, epsilon = 1e-12);
        assert_relative_eq!(hist.counts()[1], 0.75, epsilon = 1e-12);

        assert!(builder
            .build_weighted(&[1.0f64, 3.0][..], &[1.0], &Bandwidth::uniform(0.1), &bins)
            .is_err());
    }
}
