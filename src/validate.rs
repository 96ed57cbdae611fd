use crate::config::KMeansConfig;
use crate::error::KMeansError;
use ndarray::{Array2, ArrayView2};
use rand::seq::SliceRandom;
use rand::Rng;

/// Normalized inputs produced by validation: the resolved dimensionality and
/// the initial centroid matrix the iteration loop starts from.
pub(crate) struct ValidatedInput {
    pub ndim: usize,
    pub centroids: Array2<f64>,
}

/// Check and normalize the inputs of one clustering run.
///
/// Performs every precondition check before any iteration: non-empty data,
/// a sane cluster count, dimensionality agreement, parameter ranges, and the
/// shape of caller-provided centroids. When no centroids are supplied, k
/// distinct rows are sampled uniformly without replacement from the dataset
/// using the injected random source, so tests can make the sampling path
/// reproducible.
pub(crate) fn validate<R: Rng + ?Sized>(
    data: &ArrayView2<f64>,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<ValidatedInput, KMeansError> {
    let n_samples = data.nrows();
    let n_features = data.ncols();

    if n_samples == 0 || n_features == 0 {
        return Err(KMeansError::InvalidData(
            "dataset must contain at least one non-empty row vector".to_string(),
        ));
    }

    if config.k == 0 {
        return Err(KMeansError::InvalidClusterCount(
            "k must be greater than 0".to_string(),
        ));
    }
    if config.k > n_samples {
        return Err(KMeansError::InvalidClusterCount(format!(
            "number of samples ({}) is less than k ({})",
            n_samples, config.k
        )));
    }

    let ndim = match config.ndim {
        Some(ndim) if ndim != n_features => {
            return Err(KMeansError::DimensionMismatch(format!(
                "requested ndim {} but data rows have width {}",
                ndim, n_features
            )));
        }
        Some(ndim) => ndim,
        None => n_features,
    };

    // Written as a negated >= so a NaN tolerance is rejected too
    if !(config.tolerance >= 0.0) {
        return Err(KMeansError::InvalidParameter(format!(
            "tolerance must be >= 0, got {}",
            config.tolerance
        )));
    }
    if config.max_iterations == 0 {
        return Err(KMeansError::InvalidParameter(
            "max_iterations must be >= 1".to_string(),
        ));
    }

    let centroids = match &config.initial_centroids {
        Some(provided) => {
            if provided.nrows() != config.k {
                return Err(KMeansError::InvalidCentroids(format!(
                    "expected {} centroids, got {}",
                    config.k,
                    provided.nrows()
                )));
            }
            if provided.ncols() != ndim {
                return Err(KMeansError::InvalidCentroids(format!(
                    "centroids have width {} but data rows have width {}",
                    provided.ncols(),
                    ndim
                )));
            }
            provided.clone()
        }
        None => sample_centroids(data, config.k, rng),
    };

    Ok(ValidatedInput { ndim, centroids })
}

/// Sample k distinct data rows as the initial centroids
fn sample_centroids<R: Rng + ?Sized>(
    data: &ArrayView2<f64>,
    k: usize,
    rng: &mut R,
) -> Array2<f64> {
    let n_samples = data.nrows();
    let n_features = data.ncols();

    let indices: Vec<usize> = (0..n_samples).collect();
    let selected: Vec<usize> = indices.choose_multiple(rng, k).cloned().collect();

    let mut centroids = Array2::zeros((k, n_features));
    for (centroid_idx, &data_idx) in selected.iter().enumerate() {
        for j in 0..n_features {
            centroids[[centroid_idx, j]] = data[[data_idx, j]];
        }
    }

    centroids
}

/// Build a row-vector dataset from a sequence of equal-length rows.
///
/// The clustering entry points take an already-rectangular `ArrayView2`;
/// this adapter is for callers holding loose rows (e.g. pixel coordinates
/// collected into `Vec`s) and is where ragged input is rejected.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>, KMeansError> {
    if rows.is_empty() {
        return Err(KMeansError::InvalidData(
            "dataset must contain at least one row".to_string(),
        ));
    }

    let width = rows[0].len();
    if width == 0 {
        return Err(KMeansError::InvalidData(
            "rows must have at least one coordinate".to_string(),
        ));
    }

    let mut flat = Vec::with_capacity(rows.len() * width);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(KMeansError::InvalidData(format!(
                "ragged data: row 0 has width {} but row {} has width {}",
                width,
                i,
                row.len()
            )));
        }
        flat.extend_from_slice(row);
    }

    Array2::from_shape_vec((rows.len(), width), flat)
        .map_err(|e| KMeansError::InvalidData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_empty_data_rejected() {
        let data = Array2::<f64>::zeros((0, 2));
        let config = KMeansConfig::new(2);

        let result = validate(&data.view(), &config, &mut rng());
        assert!(matches!(result, Err(KMeansError::InvalidData(_))));
    }

    #[test]
    fn test_k_zero_rejected() {
        let data = array![[0.0, 0.0], [1.0, 1.0]];
        let config = KMeansConfig::new(0);

        let result = validate(&data.view(), &config, &mut rng());
        assert!(matches!(result, Err(KMeansError::InvalidClusterCount(_))));
    }

    #[test]
    fn test_k_exceeding_samples_rejected() {
        let data = array![[0.0, 0.0], [1.0, 1.0]];
        let config = KMeansConfig::new(3);

        let result = validate(&data.view(), &config, &mut rng());
        assert!(matches!(result, Err(KMeansError::InvalidClusterCount(_))));
    }

    #[test]
    fn test_explicit_ndim_must_match_row_width() {
        let data = array![[0.0, 0.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]];
        let config = KMeansConfig::new(2).with_ndim(3);

        let result = validate(&data.view(), &config, &mut rng());
        assert!(matches!(result, Err(KMeansError::DimensionMismatch(_))));
    }

    #[test]
    fn test_ndim_inferred_from_row_width() {
        let data = array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
        let config = KMeansConfig::new(2);

        let validated = validate(&data.view(), &config, &mut rng()).unwrap();
        assert_eq!(validated.ndim, 3);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let data = array![[0.0, 0.0], [1.0, 1.0]];
        let config = KMeansConfig::new(2).with_tolerance(-1e-3);

        let result = validate(&data.view(), &config, &mut rng());
        assert!(matches!(result, Err(KMeansError::InvalidParameter(_))));
    }

    #[test]
    fn test_zero_max_iterations_rejected() {
        let data = array![[0.0, 0.0], [1.0, 1.0]];
        let config = KMeansConfig::new(2).with_max_iterations(0);

        let result = validate(&data.view(), &config, &mut rng());
        assert!(matches!(result, Err(KMeansError::InvalidParameter(_))));
    }

    #[test]
    fn test_wrong_centroid_count_rejected() {
        let data = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        let config = KMeansConfig::new(2).with_initial_centroids(array![[0.0, 0.0]]);

        let result = validate(&data.view(), &config, &mut rng());
        assert!(matches!(result, Err(KMeansError::InvalidCentroids(_))));
    }

    #[test]
    fn test_wrong_centroid_width_rejected() {
        let data = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        let config =
            KMeansConfig::new(2).with_initial_centroids(array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);

        let result = validate(&data.view(), &config, &mut rng());
        assert!(matches!(result, Err(KMeansError::InvalidCentroids(_))));
    }

    #[test]
    fn test_provided_centroids_pass_through() {
        let data = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        let means = array![[0.0, 0.0], [2.0, 2.0]];
        let config = KMeansConfig::new(2).with_initial_centroids(means.clone());

        let validated = validate(&data.view(), &config, &mut rng()).unwrap();
        assert_eq!(validated.centroids, means);
    }

    #[test]
    fn test_sampled_centroids_are_distinct_rows() {
        let data = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];

        // k == n forces every row to be selected exactly once
        let centroids = sample_centroids(&data.view(), 4, &mut rng());

        let mut rows: Vec<(i64, i64)> = centroids
            .rows()
            .into_iter()
            .map(|r| (r[0] as i64, r[1] as i64))
            .collect();
        rows.sort_unstable();
        assert_eq!(rows, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_sampling_reproducible_for_same_source() {
        let data = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]];

        let first = sample_centroids(&data.view(), 2, &mut rng());
        let second = sample_centroids(&data.view(), 2, &mut rng());
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_rows_builds_row_matrix() {
        let rows = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let data = from_rows(&rows).unwrap();

        assert_eq!(data, array![[0.0, 1.0], [2.0, 3.0]]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![0.0, 1.0], vec![2.0]];

        let result = from_rows(&rows);
        assert!(matches!(result, Err(KMeansError::InvalidData(_))));
    }

    #[test]
    fn test_from_rows_rejects_empty_input() {
        assert!(matches!(from_rows(&[]), Err(KMeansError::InvalidData(_))));
        assert!(matches!(
            from_rows(&[vec![]]),
            Err(KMeansError::InvalidData(_))
        ));
    }
}
