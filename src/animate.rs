use crate::algorithm;
use crate::config::KMeansConfig;
use crate::engine::Clustering;
use crate::error::KMeansError;
use crate::render::{ClusterRenderer, IterationFrame, IterationObserver, LegendAnchor, RenderFrame};
use crate::validate::validate;
use ndarray::ArrayView2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Result of an animated clustering run: the clustering itself plus the
/// renderer's handle for further caller manipulation.
pub struct AnimatedClustering<H> {
    pub clustering: Clustering,
    pub handle: H,
}

/// Bridges the engine's observer seam to a rendering backend, attaching the
/// legend placement chosen for this dataset.
struct RenderAdapter<R: ClusterRenderer> {
    renderer: R,
    legend: LegendAnchor,
}

impl<R: ClusterRenderer> IterationObserver for RenderAdapter<R> {
    fn on_iteration(&mut self, frame: IterationFrame<'_>) {
        self.renderer.draw(&RenderFrame {
            iteration: frame.iteration,
            partition: frame.partition,
            centroids: frame.centroids,
            legend: self.legend,
        });
    }
}

/// Perform clustering while drawing every iteration through `renderer`.
///
/// Identical loop semantics to [`crate::cluster`], with two additions:
/// the data must be 2-D or 3-D (nothing else can be drawn), and the
/// renderer is invoked once per iteration with the current partition and
/// centroids. Datasets above [`crate::LARGE_DATASET_THRESHOLD`] points pin
/// the legend to the upper-right corner instead of letting the backend
/// auto-place it.
///
/// Validation errors take precedence over the dimensionality gate: a
/// four-wide dataset with an explicit `ndim` of 3 fails with
/// `DimensionMismatch`, not `UnsupportedDimension`.
///
/// # Errors
///
/// All of [`crate::cluster`]'s errors, plus `UnsupportedDimension` when the
/// (validated) dimensionality is neither 2 nor 3. Renderer failures are the
/// backend's own concern and are never surfaced here.
pub fn view_clustering<R: ClusterRenderer>(
    data: &ArrayView2<f64>,
    config: &KMeansConfig,
    renderer: R,
) -> Result<AnimatedClustering<R::Handle>, KMeansError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let validated = validate(data, config, &mut rng)?;

    if validated.ndim != 2 && validated.ndim != 3 {
        return Err(KMeansError::UnsupportedDimension(validated.ndim));
    }

    let mut adapter = RenderAdapter {
        renderer,
        legend: LegendAnchor::for_dataset(data.nrows()),
    };

    let clustering = algorithm::iterate(data, config, validated.centroids, Some(&mut adapter))?;
    let handle = adapter.renderer.finish(&clustering);

    Ok(AnimatedClustering { clustering, handle })
}
