//! # kmeans-anim
//!
//! Iterative k-means clustering with a per-iteration observer seam, built
//! for animating how a clustering settles.
//!
//! ## Features
//!
//! - **Headless engine**: nearest-centroid assignment, mean update, and a
//!   per-centroid convergence test with a hard iteration bound
//! - **ndarray compatible**: datasets are `(n_samples, n_features)` row
//!   matrices
//! - **Observer seam**: watch every iteration's partition and centroids
//!   without touching the result
//! - **Renderer-agnostic animation**: 2-D/3-D runs drive any
//!   [`ClusterRenderer`] backend and hand its figure handle back
//! - **Parallel assignment**: rayon across points inside one iteration;
//!   iterations themselves stay strictly sequential
//!
//! ## Example
//!
//! ```rust
//! use kmeans_anim::{cluster, KMeansConfig};
//! use ndarray::array;
//!
//! let data = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
//!
//! let config = KMeansConfig::new(2).with_seed(7);
//! let result = cluster(&data.view(), &config).unwrap();
//!
//! assert_eq!(result.k(), 2);
//! assert_eq!(result.partition.len(), 4);
//! ```
//!
//! ## Fixed starting centroids
//!
//! ```rust
//! use kmeans_anim::{cluster, KMeansConfig};
//! use ndarray::array;
//!
//! let data = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
//!
//! let config = KMeansConfig::new(2)
//!     .with_initial_centroids(array![[0.0, 0.0], [10.0, 10.0]])
//!     .with_tolerance(0.01)
//!     .with_max_iterations(10);
//!
//! let result = cluster(&data.view(), &config).unwrap();
//! assert_eq!(result.iterations, 2);
//! ```

mod algorithm;
mod animate;
mod config;
mod distance;
mod engine;
mod error;
mod partition;
mod render;
mod validate;

pub use animate::{view_clustering, AnimatedClustering};
pub use config::{KMeansConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use distance::inertia;
pub use engine::{cluster, cluster_observed, cluster_with_rng, Clustering};
pub use error::KMeansError;
pub use partition::Partition;
pub use render::{
    ClusterRenderer, IterationFrame, IterationObserver, LegendAnchor, RenderFrame, RenderStyle,
    DEFAULT_PALETTE, LARGE_DATASET_THRESHOLD,
};
pub use validate::from_rows;
