use crate::algorithm;
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::partition::Partition;
use crate::render::IterationObserver;
use ndarray::{Array2, ArrayView2};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Result of a converged clustering run
#[derive(Debug, Clone)]
pub struct Clustering {
    /// Final assignment of every point to a cluster
    pub partition: Partition,
    /// Final centroids, one row per cluster
    pub centroids: Array2<f64>,
    /// Number of completed iterations
    pub iterations: usize,
}

impl Clustering {
    /// Number of clusters
    pub fn k(&self) -> usize {
        self.centroids.nrows()
    }

    /// Dimensionality of the clustered data
    pub fn ndim(&self) -> usize {
        self.centroids.ncols()
    }
}

/// Partition `data` into `config.k` clusters.
///
/// Runs the full assign/update/converge loop headlessly. The engine holds no
/// state across calls: one call is one attempt, and a failed run can only be
/// retried by calling again with corrected inputs.
///
/// # Arguments
///
/// * `data` - Dataset of shape `(n_samples, n_features)`, one point per row
/// * `config` - Cluster count, tolerance, iteration bound, seed
///
/// # Errors
///
/// Returns a validation error (`InvalidData`, `InvalidClusterCount`,
/// `DimensionMismatch`, `InvalidCentroids`, `InvalidParameter`) before any
/// iteration runs, or `MaxIterationsExceeded` if the centroids fail to
/// stabilize within `config.max_iterations`.
///
/// # Example
///
/// ```
/// use kmeans_anim::{cluster, KMeansConfig};
/// use ndarray::array;
///
/// let data = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
/// let config = KMeansConfig::new(2)
///     .with_initial_centroids(array![[0.0, 0.0], [10.0, 10.0]])
///     .with_tolerance(0.01)
///     .with_max_iterations(10);
///
/// let result = cluster(&data.view(), &config).unwrap();
/// assert_eq!(result.iterations, 2);
/// assert_eq!(result.partition.cluster(0), &[0, 1]);
/// ```
pub fn cluster(data: &ArrayView2<f64>, config: &KMeansConfig) -> Result<Clustering, KMeansError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    algorithm::run_with_rng(data, config, &mut rng, None)
}

/// Like [`cluster`], notifying `observer` once per iteration.
///
/// The observer receives each iteration's partition and freshly updated
/// centroids after the update step and before the convergence check. Its
/// output is never consumed; attaching an observer cannot change the result.
pub fn cluster_observed(
    data: &ArrayView2<f64>,
    config: &KMeansConfig,
    observer: &mut dyn IterationObserver,
) -> Result<Clustering, KMeansError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    algorithm::run_with_rng(data, config, &mut rng, Some(observer))
}

/// Like [`cluster`], drawing initial centroids from a caller-supplied
/// random source instead of the seeded default.
///
/// Only the initial-centroid sampling path consumes randomness; with
/// explicit `initial_centroids` in the config, `rng` is untouched.
pub fn cluster_with_rng<R: Rng + ?Sized>(
    data: &ArrayView2<f64>,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<Clustering, KMeansError> {
    algorithm::run_with_rng(data, config, rng, None)
}
