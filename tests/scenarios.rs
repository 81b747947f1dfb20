//! End-to-end scenarios through the re-exported API

use approx::assert_relative_eq;
use triweight_stats::prelude::*;
use triweight_stats::triweight_histogram::spacing;

#[test]
fn uniform_grid_spacing() -> anyhow::Result<()> {
    let dt = spacing(&[0.0, 1.0, 2.0, 3.0])?;
    for value in dt {
        assert_relative_eq!(value, 1.0);
    }
    Ok(())
}

#[test]
fn edges_from_midpoints() -> anyhow::Result<()> {
    let edges = bin_edges(&[1.0, 2.0, 3.0], 0.5, 3.5)?;
    assert_eq!(edges, vec![0.5, 1.5, 2.5, 3.5]);
    Ok(())
}

#[test]
fn sigmoid_at_center_is_exactly_half() {
    for &m in &[-4.0, 0.0, 0.3, 17.0] {
        assert_eq!(triweight_sigmoid(m, m, 1.0, 0.0, 1.0), 0.5);
    }
}

#[test]
fn midpoints_to_weights_pipeline() -> anyhow::Result<()> {
    // Bins centered on a non-uniform time grid
    let mids = [0.0, 0.5, 1.5, 3.0, 5.0];
    let edges = BinEdges::from_midpoints(&mids, -0.25, 6.0)?;
    assert!(edges.is_strictly_increasing());

    let samples = [0.1f64, 1.4, 2.2, 4.9];
    let sig = [0.05, 0.05, 0.1, 0.2];
    let weights = triweighted_histogram(&samples[..], &sig[..], edges.as_slice())?;
    assert_eq!(weights.shape(), (4, 5));

    // every kernel lies inside the outer edges, so no mass is lost
    for sum in weights.row_sums() {
        assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
    }
    let counts = weights.column_sums();
    let total: f64 = counts.iter().sum();
    assert_relative_eq!(total, 4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn steepness_parameterized_sigmoid() {
    let soft = TriweightSigmoid::from_steepness(0.0, 1.0, 0.0, 1.0);
    let sharp = TriweightSigmoid::from_steepness(0.0, 10.0, 0.0, 1.0);
    assert!(sharp.bandwidth < soft.bandwidth);
    // the sharper curve has already saturated where the softer one has not
    assert_eq!(sharp.evaluate(1.0), 1.0);
    assert!(soft.evaluate(1.0) < 1.0);
}
