use crate::partition::Partition;
use ndarray::{Array1, ArrayView1, ArrayView2};
use rayon::prelude::*;

/// Squared Euclidean distance between two equal-length vectors
#[inline]
fn squared_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Index of the centroid nearest to `point`.
///
/// Ties (exact float equality) go to the lowest centroid index: the scan
/// starts at index 0 and only a strictly smaller distance replaces the
/// current best.
pub(crate) fn nearest_centroid(point: ArrayView1<f64>, centroids: &ArrayView2<f64>) -> usize {
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;

    for (idx, centroid) in centroids.rows().into_iter().enumerate() {
        let dist = squared_distance(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = idx;
        }
    }

    best
}

/// Partition all points by nearest centroid.
///
/// Each point's search is independent, so the scan is parallelized across
/// points; the result is identical to a sequential scan. Neither input is
/// mutated.
pub(crate) fn assign(data: &ArrayView2<f64>, centroids: &ArrayView2<f64>) -> Partition {
    let n_samples = data.nrows();
    let mut assignments = vec![0usize; n_samples];

    assignments
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| {
            *slot = nearest_centroid(data.row(i), centroids);
        });

    Partition::from_assignments(assignments, centroids.nrows())
}

/// Euclidean norm of each centroid's movement between two iterations.
///
/// The result is index-aligned: entry i is how far cluster i's centroid
/// moved.
pub(crate) fn centroid_displacements(
    old_centroids: &ArrayView2<f64>,
    new_centroids: &ArrayView2<f64>,
) -> Array1<f64> {
    let k = old_centroids.nrows();

    let shifts: Vec<f64> = (0..k)
        .into_par_iter()
        .map(|i| {
            let old_c = old_centroids.row(i);
            let new_c = new_centroids.row(i);

            let mut diff_sq = 0.0f64;
            for j in 0..old_c.len() {
                let d = new_c[j] - old_c[j];
                diff_sq += d * d;
            }
            diff_sq.sqrt()
        })
        .collect();

    Array1::from_vec(shifts)
}

/// Convergence test: every centroid's displacement is within `tolerance`.
///
/// This is an AND across all k centroids, not an aggregate; a single moving
/// centroid keeps the run going.
pub(crate) fn has_converged(displacements: &Array1<f64>, tolerance: f64) -> bool {
    displacements.iter().all(|&d| d <= tolerance)
}

/// Sum of squared distances from each point to its assigned centroid.
///
/// The standard k-means objective; it never increases between consecutive
/// iterations of a correct implementation. Summation order is not fixed, so
/// compare values with a tolerance rather than exactly.
pub fn inertia(
    data: &ArrayView2<f64>,
    partition: &Partition,
    centroids: &ArrayView2<f64>,
) -> f64 {
    partition
        .assignments()
        .par_iter()
        .enumerate()
        .map(|(i, &cluster)| squared_distance(data.row(i), centroids.row(cluster)))
        .sum()
}
