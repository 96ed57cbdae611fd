use crate::config::KMeansConfig;
use crate::distance::{assign, centroid_displacements, has_converged};
use crate::engine::Clustering;
use crate::error::KMeansError;
use crate::partition::Partition;
use crate::render::{IterationFrame, IterationObserver};
use crate::validate::validate;
use ndarray::{Array2, ArrayView2};
use rand::Rng;
use tracing::{debug, info};

/// Validate inputs, then drive the assign/update/converge loop.
pub(crate) fn run_with_rng<R: Rng + ?Sized>(
    data: &ArrayView2<f64>,
    config: &KMeansConfig,
    rng: &mut R,
    observer: Option<&mut dyn IterationObserver>,
) -> Result<Clustering, KMeansError> {
    let validated = validate(data, config, rng)?;
    iterate(data, config, validated.centroids, observer)
}

/// The iteration loop over already-validated inputs.
///
/// Each round rebuilds the partition from the current centroids, recomputes
/// the centroids from the partition, notifies the observer, and then tests
/// convergence against the previous centroids. The single evolving centroid
/// set is owned here; the observer is a best-effort side channel whose
/// output never feeds back into control flow.
pub(crate) fn iterate(
    data: &ArrayView2<f64>,
    config: &KMeansConfig,
    initial_centroids: Array2<f64>,
    mut observer: Option<&mut dyn IterationObserver>,
) -> Result<Clustering, KMeansError> {
    let mut centroids = initial_centroids;

    for t in 0..config.max_iterations {
        let partition = assign(data, &centroids.view());
        let new_centroids = update_centroids(data, &partition, &centroids.view());

        if let Some(obs) = observer.as_deref_mut() {
            obs.on_iteration(IterationFrame {
                iteration: t,
                partition: &partition,
                centroids: new_centroids.view(),
            });
        }

        let shifts = centroid_displacements(&centroids.view(), &new_centroids.view());
        let max_shift = shifts.iter().cloned().fold(0.0f64, f64::max);
        debug!(
            iteration = t + 1,
            max_iterations = config.max_iterations,
            max_shift,
            "completed assignment/update round"
        );

        let converged = has_converged(&shifts, config.tolerance);
        centroids = new_centroids;

        if converged {
            info!(iterations = t + 1, "clustering converged");
            return Ok(Clustering {
                partition,
                centroids,
                iterations: t + 1,
            });
        }
    }

    Err(KMeansError::MaxIterationsExceeded {
        max_iterations: config.max_iterations,
    })
}

/// Recompute each centroid as the per-dimension mean of its cluster.
///
/// An empty cluster keeps its previous centroid unchanged: the mean of zero
/// points is undefined, and retaining the old position is deterministic and
/// never produces NaN.
pub(crate) fn update_centroids(
    data: &ArrayView2<f64>,
    partition: &Partition,
    previous: &ArrayView2<f64>,
) -> Array2<f64> {
    let n_features = data.ncols();
    let mut centroids = previous.to_owned();

    for (cluster_idx, members) in partition.iter() {
        if members.is_empty() {
            continue;
        }
        let count = members.len() as f64;
        for j in 0..n_features {
            let mut sum = 0.0;
            for &point in members {
                sum += data[[point, j]];
            }
            centroids[[cluster_idx, j]] = sum / count;
        }
    }

    centroids
}
