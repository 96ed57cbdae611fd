use ndarray::{Array2, ArrayView2, Axis};

/// Assignment of every data point to exactly one cluster index.
///
/// A partition is rebuilt from scratch on every iteration; it is a snapshot,
/// never patched in place. Cluster indices identify the same cluster across
/// iterations (cluster 3 at iteration t+1 is the evolution of cluster 3 at
/// iteration t). Clusters may legally be empty.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Point index -> cluster index
    assignments: Vec<usize>,
    /// Cluster index -> point indices, in dataset order
    clusters: Vec<Vec<usize>>,
}

impl Partition {
    /// Group a flat assignment vector into per-cluster membership lists.
    pub(crate) fn from_assignments(assignments: Vec<usize>, k: usize) -> Self {
        let mut clusters = vec![Vec::new(); k];
        for (point, &cluster) in assignments.iter().enumerate() {
            clusters[cluster].push(point);
        }
        Self {
            assignments,
            clusters,
        }
    }

    /// Number of clusters (including empty ones)
    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    /// Number of points in the partition
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// `true` when the partition holds no points
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Cluster index assigned to each point, in dataset order
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Point indices belonging to the given cluster
    pub fn cluster(&self, cluster: usize) -> &[usize] {
        &self.clusters[cluster]
    }

    /// Number of points in the given cluster
    pub fn cluster_len(&self, cluster: usize) -> usize {
        self.clusters[cluster].len()
    }

    /// `true` when the given cluster has no members
    pub fn cluster_is_empty(&self, cluster: usize) -> bool {
        self.clusters[cluster].is_empty()
    }

    /// Iterate over `(cluster index, member point indices)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.clusters
            .iter()
            .enumerate()
            .map(|(idx, members)| (idx, members.as_slice()))
    }

    /// Gather the rows of `data` belonging to the given cluster.
    ///
    /// Returns a `(cluster_len, ndim)` matrix; empty clusters yield a
    /// zero-row matrix.
    pub fn cluster_points(&self, data: &ArrayView2<f64>, cluster: usize) -> Array2<f64> {
        data.select(Axis(0), &self.clusters[cluster])
    }
}
