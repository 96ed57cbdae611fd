//! Basic example demonstrating kmeans-anim usage
//!
//! Run with: cargo run --example basic --release

use kmeans_anim::{cluster_observed, IterationFrame, IterationObserver, KMeansConfig, RenderStyle};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

/// Prints a one-line summary of each iteration as the clustering settles
struct ConsoleObserver;

impl IterationObserver for ConsoleObserver {
    fn on_iteration(&mut self, frame: IterationFrame<'_>) {
        let sizes: Vec<usize> = (0..frame.partition.k())
            .map(|c| frame.partition.cluster_len(c))
            .collect();
        println!("iteration {}: cluster sizes {:?}", frame.iteration + 1, sizes);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== kmeans-anim example ===\n");

    // Generate synthetic data: 3 clusters in 2D
    let n_samples = 300;
    let n_features = 2;
    let n_clusters = 3;

    println!(
        "Generating {} samples with {} features...",
        n_samples, n_features
    );

    let centers = [[-5.0f64, -5.0], [0.0, 5.0], [5.0, -5.0]];

    let mut data = Array2::<f64>::zeros((n_samples, n_features));
    let noise = Array2::random((n_samples, n_features), Uniform::new(-1.0, 1.0));
    for i in 0..n_samples {
        let cluster_idx = i % n_clusters;
        data[[i, 0]] = centers[cluster_idx][0] + noise[[i, 0]];
        data[[i, 1]] = centers[cluster_idx][1] + noise[[i, 1]];
    }

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    let config = KMeansConfig::new(n_clusters)
        .with_seed(42)
        .with_tolerance(1e-6)
        .with_max_iterations(100);

    let mut observer = ConsoleObserver;
    let result = match cluster_observed(&data.view(), &config, &mut observer) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("clustering failed: {}", err);
            return;
        }
    };

    println!("\nConverged after {} iterations", result.iterations);

    let style = RenderStyle::default();
    println!("Found centroids:");
    for (i, centroid) in result.centroids.rows().into_iter().enumerate() {
        let [r, g, b] = style.color_for(i);
        println!(
            "  Cluster {} ({} points, #{:02x}{:02x}{:02x}): ({:.2}, {:.2})",
            i,
            result.partition.cluster_len(i),
            r,
            g,
            b,
            centroid[0],
            centroid[1]
        );
    }
}
