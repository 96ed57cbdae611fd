use ndarray::Array2;

/// Default convergence tolerance: 20x machine epsilon for `f64`.
///
/// A centroid that moves no more than this between two iterations is
/// considered stable.
pub const DEFAULT_TOLERANCE: f64 = 20.0 * f64::EPSILON;

/// Default cap on loop iterations before a run is declared exhausted.
pub const DEFAULT_MAX_ITERATIONS: usize = 250;

/// Configuration for one clustering run
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Expected dimensionality of the data. When `None`, the dimensionality
    /// is inferred from the row width of the dataset; when set, validation
    /// fails if it disagrees with the data.
    pub ndim: Option<usize>,

    /// Initial cluster centroids, one row per cluster. When `None`, k
    /// distinct points are sampled uniformly at random from the dataset.
    pub initial_centroids: Option<Array2<f64>>,

    /// Convergence tolerance. The run stops once every centroid moves no
    /// more than this between consecutive iterations. Must be >= 0.
    pub tolerance: f64,

    /// Maximum number of iterations before the run fails. Must be >= 1.
    pub max_iterations: usize,

    /// Random seed for initial-centroid sampling. Unused when
    /// `initial_centroids` is supplied.
    pub seed: u64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            ndim: None,
            initial_centroids: None,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: 0,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the expected dimensionality
    pub fn with_ndim(mut self, ndim: usize) -> Self {
        self.ndim = Some(ndim);
        self
    }

    /// Set the initial centroids (one row per cluster)
    pub fn with_initial_centroids(mut self, centroids: Array2<f64>) -> Self {
        self.initial_centroids = Some(centroids);
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum number of iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the random seed used for centroid sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
