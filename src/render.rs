//! Observer and renderer seams.
//!
//! The engine never depends on a concrete plotting backend. Headless callers
//! attach an [`IterationObserver`] to watch the loop; the animated entry
//! point drives a [`ClusterRenderer`] whose associated `Handle` stands in
//! for whatever figure or surface the backend produces.

use crate::engine::Clustering;
use crate::partition::Partition;
use ndarray::ArrayView2;

/// Datasets above this size switch the default legend anchor from
/// [`LegendAnchor::Best`] to a fixed corner, since automatic placement is
/// expensive on dense scatter plots.
pub const LARGE_DATASET_THRESHOLD: usize = 100_000;

/// Snapshot of one completed iteration, handed to observers.
///
/// Borrows the loop's working state; observers that need to keep a frame
/// must copy out of it.
pub struct IterationFrame<'a> {
    /// Zero-based iteration index
    pub iteration: usize,
    /// The partition built this iteration
    pub partition: &'a Partition,
    /// The centroids recomputed from that partition
    pub centroids: ArrayView2<'a, f64>,
}

/// Per-iteration sink for watching a clustering run.
///
/// Notification is synchronous and best-effort: the engine consumes no
/// return value and does not guard against panics, so implementations must
/// contain their own failures (log and continue) rather than unwind into
/// the loop.
pub trait IterationObserver {
    fn on_iteration(&mut self, frame: IterationFrame<'_>);
}

/// Where a rendering backend should place its legend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendAnchor {
    /// Let the backend pick the least-occluding spot
    Best,
    /// Pin to the upper-right corner
    UpperRight,
}

impl LegendAnchor {
    /// Default anchor policy for a dataset of `n_points`
    pub fn for_dataset(n_points: usize) -> Self {
        if n_points > LARGE_DATASET_THRESHOLD {
            LegendAnchor::UpperRight
        } else {
            LegendAnchor::Best
        }
    }
}

/// One frame of the animated run, handed to the renderer each iteration
pub struct RenderFrame<'a> {
    /// Zero-based iteration index
    pub iteration: usize,
    /// The partition built this iteration
    pub partition: &'a Partition,
    /// The centroids recomputed from that partition
    pub centroids: ArrayView2<'a, f64>,
    /// Legend placement chosen from the dataset size
    pub legend: LegendAnchor,
}

/// A rendering backend for animated clustering.
///
/// `draw` is called once per iteration and must not fail the run: backends
/// catch and log their own errors. `finish` runs after convergence and
/// yields the backend's handle (a figure, a window, a frame list) for
/// further caller manipulation.
pub trait ClusterRenderer {
    type Handle;

    fn draw(&mut self, frame: &RenderFrame<'_>);

    fn finish(self, clustering: &Clustering) -> Self::Handle;
}

/// Ten-color categorical palette (the Tableau colors), as RGB triples.
pub const DEFAULT_PALETTE: [[u8; 3]; 10] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
];

/// Marker styling for renderers, passed explicitly instead of living in
/// process-wide state. Cluster colors wrap around the palette.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Cluster colors; must be non-empty
    pub palette: Vec<[u8; 3]>,
    /// Marker size for data points
    pub point_size: f64,
    /// Marker size for centroids
    pub centroid_size: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let point_size = 10.0;
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            point_size,
            centroid_size: 2.0 * point_size,
        }
    }
}

impl RenderStyle {
    /// Color for the given cluster index, wrapping past the palette end
    pub fn color_for(&self, cluster: usize) -> [u8; 3] {
        self.palette[cluster % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_anchor_switches_above_threshold() {
        assert_eq!(LegendAnchor::for_dataset(10), LegendAnchor::Best);
        assert_eq!(
            LegendAnchor::for_dataset(LARGE_DATASET_THRESHOLD),
            LegendAnchor::Best
        );
        assert_eq!(
            LegendAnchor::for_dataset(LARGE_DATASET_THRESHOLD + 1),
            LegendAnchor::UpperRight
        );
    }

    #[test]
    fn test_palette_wraps_around() {
        let style = RenderStyle::default();

        assert_eq!(style.color_for(0), style.color_for(10));
        assert_eq!(style.color_for(3), style.color_for(13));
    }

    #[test]
    fn test_default_centroid_markers_are_larger() {
        let style = RenderStyle::default();
        assert_eq!(style.centroid_size, 2.0 * style.point_size);
    }
}
