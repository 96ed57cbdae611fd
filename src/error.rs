use thiserror::Error;

/// Error types for the kmeans-anim library
///
/// Every variant except [`KMeansError::MaxIterationsExceeded`] is raised
/// during validation, before the first iteration runs. A failed run is never
/// retried internally; callers may re-invoke with corrected inputs, a looser
/// tolerance, or a higher iteration bound.
#[derive(Error, Debug)]
pub enum KMeansError {
    /// The dataset is empty or its rows do not share a single width
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The requested cluster count is zero or exceeds the number of points
    #[error("Invalid cluster count: {0}")]
    InvalidClusterCount(String),

    /// An explicitly requested dimensionality does not match the data
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The supplied initial centroids have the wrong count or width
    #[error("Invalid initial centroids: {0}")]
    InvalidCentroids(String),

    /// Tolerance or iteration bound outside its legal range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Animated clustering only supports 2-D and 3-D data
    #[error("Cannot animate {0}-dimensional data; only 2-D and 3-D clustering can be drawn")]
    UnsupportedDimension(usize),

    /// The iteration bound was exhausted before the centroids stabilized
    #[error("No convergence within {max_iterations} iterations")]
    MaxIterationsExceeded { max_iterations: usize },
}
