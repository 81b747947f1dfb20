//! Property-based tests for the triweight kernel, spacing and bin edges

use approx::assert_relative_eq;
use proptest::prelude::*;
use triweight_core::ExecutionStrategy;
use triweight_histogram::*;

/// Strictly increasing grid built from a start point and positive gaps
fn increasing_grid(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (-100.0..100.0f64, prop::collection::vec(0.01..10.0f64, (min_len - 1)..max_len)).prop_map(
        |(start, gaps)| {
            let mut t = Vec::with_capacity(gaps.len() + 1);
            t.push(start);
            let mut current = start;
            for gap in gaps {
                current += gap;
                t.push(current);
            }
            t
        },
    )
}

proptest! {
    // Property: spacing of a strictly increasing grid is positive everywhere
    #[test]
    fn prop_spacing_positive(t in increasing_grid(3, 60)) {
        let dt = spacing(&t[..]).unwrap();
        prop_assert_eq!(dt.len(), t.len());
        for (i, &value) in dt.iter().enumerate() {
            prop_assert!(value > 0.0, "dt[{}] = {} for t = {:?}", i, value, t);
        }
    }

    // Property: the smooth step never decreases and stays inside [0, 1]
    #[test]
    fn prop_cdf_monotone_and_bounded(
        a in -10.0..10.0f64,
        b in -10.0..10.0f64,
        m in -5.0..5.0f64,
        h in 0.01..5.0f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = triweight_cdf(lo, m, h);
        let p_hi = triweight_cdf(hi, m, h);
        prop_assert!(p_lo <= p_hi + 1e-12, "cdf({}) = {} > cdf({}) = {}", lo, p_lo, hi, p_hi);
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&p_lo));
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&p_hi));
    }

    // Property: the smooth step is exactly 0 or 1 outside the kernel support
    #[test]
    fn prop_cdf_saturates(m in -5.0..5.0f64, h in 0.01..5.0f64, beyond in 0.0..20.0f64) {
        let reach = 3.0 * h + beyond;
        prop_assert_eq!(triweight_cdf(m - reach - 1e-9, m, h), 0.0);
        prop_assert_eq!(triweight_cdf(m + reach + 1e-9, m, h), 1.0);
    }

    // Property: the sigmoid passes through the middle of its range at x0
    #[test]
    fn prop_sigmoid_midpoint(
        x0 in -50.0..50.0f64,
        h in 0.01..10.0f64,
        ymin in -10.0..10.0f64,
        ymax in -10.0..10.0f64,
    ) {
        let value = triweight_sigmoid(x0, x0, h, ymin, ymax);
        assert_relative_eq!(value, (ymin + ymax) / 2.0, epsilon = 1e-12);
    }

    // Property: a steeper sigmoid has a narrower bandwidth
    #[test]
    fn prop_bandwidth_decreasing(k in 0.01..100.0f64, delta in 0.01..100.0f64) {
        prop_assert!(bandwidth_from_steepness(k) > bandwidth_from_steepness(k + delta));
    }

    // Property: rows sum to one when the edges cover the full kernel support
    #[test]
    fn prop_row_sums_with_covering_edges(
        xs in prop::collection::vec(-20.0..20.0f64, 1..30),
        sig in 0.01..2.0f64,
        num_bins in 1usize..40,
    ) {
        let reach = 3.0 * sig + 1.0;
        let edges = BinEdges::uniform(-20.0 - reach, 20.0 + reach, num_bins).unwrap();
        let matrix = TriweightHistogramBuilder::new()
            .weights(&xs[..], &Bandwidth::uniform(sig), &edges)
            .unwrap();
        for (i, sum) in matrix.row_sums().into_iter().enumerate() {
            prop_assert!((sum - 1.0).abs() < 1e-12, "row {} sums to {}", i, sum);
        }
    }

    // Property: every entry equals the scalar bin weight
    #[test]
    fn prop_matrix_matches_scalar_weights(
        xs in prop::collection::vec(-5.0..5.0f64, 1..10),
        sigs in prop::collection::vec(0.05..2.0f64, 10),
        edges in increasing_grid(2, 12),
    ) {
        let sig = &sigs[..xs.len()];
        let matrix = triweighted_histogram(&xs[..], sig, &edges[..]).unwrap();
        prop_assert_eq!(matrix.shape(), (xs.len(), edges.len() - 1));
        for (i, &x) in xs.iter().enumerate() {
            for j in 0..edges.len() - 1 {
                let expected = bin_weight(x, sig[i], edges[j], edges[j + 1]);
                let actual = matrix.get(i, j).unwrap();
                prop_assert!((actual - expected).abs() < 1e-12);
                prop_assert!(actual >= -1e-12);
            }
        }
    }

    // Property: averaging derived edges recovers uniform interior midpoints
    #[test]
    fn prop_midpoint_round_trip(
        start in -100.0..100.0f64,
        step in 0.1..10.0f64,
        n in 3usize..30,
    ) {
        let mids: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
        let lower = start - step / 2.0;
        let upper = mids[n - 1] + step / 2.0;
        let edges = BinEdges::from_midpoints(&mids[..], lower, upper).unwrap();
        prop_assert!(edges.is_strictly_increasing());

        let recovered = edges.midpoints();
        for i in 1..n - 1 {
            prop_assert!((recovered[i] - mids[i]).abs() < 1e-9, "midpoint {} drifted", i);
        }
    }

    // Property: edge derivation keeps the caller's bounds and places edges below their midpoints
    #[test]
    fn prop_edges_keep_bounds(t in increasing_grid(2, 40)) {
        let n = t.len();
        let lower = t[0] - 1.0;
        let upper = t[n - 1] + 1.0;
        let edges = bin_edges(&t[..], lower, upper).unwrap();
        prop_assert_eq!(edges.len(), n + 1);
        prop_assert_eq!(edges[0], lower);
        prop_assert_eq!(edges[n], upper);
        for i in 1..n {
            prop_assert!(edges[i] < t[i], "edge {} not below its midpoint", i);
        }
    }

    // Property: the execution strategy never changes the result
    #[test]
    fn prop_strategies_agree(
        xs in prop::collection::vec(-3.0..3.0f64, 1..300),
        sig in 0.05..1.0f64,
    ) {
        let edges = BinEdges::uniform(-4.0, 4.0, 16).unwrap();
        let bandwidth = Bandwidth::uniform(sig);
        let build = |strategy: ExecutionStrategy| {
            TriweightHistogramBuilder::with_config(
                HistogramConfig::default()
                    .with_strategy(strategy)
                    .with_parallel_threshold(1),
            )
            .weights(&xs[..], &bandwidth, &edges)
            .unwrap()
        };
        let sequential = build(ExecutionStrategy::Sequential);
        prop_assert_eq!(&sequential, &build(ExecutionStrategy::Parallel));
        prop_assert_eq!(&sequential, &build(ExecutionStrategy::Auto));
    }
}

#[test]
fn test_documented_scenarios() {
    let dt = spacing(&[0.0, 1.0, 2.0, 3.0]).unwrap();
    assert_eq!(dt, vec![1.0, 1.0, 1.0, 1.0]);

    let edges = bin_edges(&[1.0, 2.0, 3.0], 0.5, 3.5).unwrap();
    assert_eq!(edges, vec![0.5, 1.5, 2.5, 3.5]);

    assert_eq!(triweight_sigmoid(2.0, 2.0, 1.0, 0.0, 1.0), 0.5);
}
