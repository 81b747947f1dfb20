//! Smoothed histogram of a bimodal sample
//!
//! Run with: RUST_LOG=debug cargo run -p triweight-histogram --example smooth_histogram_demo

use rand::prelude::*;
use rand_distr::Normal;
use tracing_subscriber::EnvFilter;
use triweight_histogram::{
    bandwidth_from_steepness, smooth_histogram, Bandwidth, BinEdges, TriweightSigmoid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Triweight Smoothed Histogram ===\n");

    let mut rng = StdRng::seed_from_u64(2024);
    let left = Normal::new(-2.0, 0.5)?;
    let right = Normal::new(1.5, 0.8)?;
    let samples: Vec<f64> = (0..2000)
        .map(|i| if i % 3 == 0 { left.sample(&mut rng) } else { right.sample(&mut rng) })
        .collect();

    // Bins from midpoints on a grid that is finer near the origin
    let mids: Vec<f64> = (-12i32..=12).map(|i| 0.02 * (i * i.abs()) as f64).collect();
    let edges = BinEdges::from_midpoints(&mids[..], -3.2, 3.2)?;
    println!("1. Bins derived from {} midpoints", mids.len());
    println!("   edges: [{:.3}, ..., {:.3}]", edges.lower(), edges.upper());

    let hist = smooth_histogram(&samples[..], &Bandwidth::uniform(0.15), &edges)?;
    println!("\n2. {hist}");
    println!("   lost mass outside edges: {:.3}", hist.lost_mass());

    let max_density = hist.max_density();
    for ((lo, hi), density) in edges.iter_bounds().zip(hist.densities()) {
        let bar = "#".repeat((40.0 * density / max_density).round() as usize);
        println!("   [{lo:6.2}, {hi:6.2}) {density:6.3} {bar}");
    }

    println!("\n3. Sigmoid from steepness");
    let sigmoid = TriweightSigmoid::from_steepness(0.0, 2.0, -1.0, 1.0);
    let (start, end) = sigmoid.transition();
    println!(
        "   k = 2 -> bandwidth {:.4}, flat outside [{start:.3}, {end:.3}]",
        bandwidth_from_steepness(2.0)
    );
    for x in [-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0] {
        println!("   f({x:5.2}) = {:7.4}", sigmoid.evaluate(x));
    }

    Ok(())
}
