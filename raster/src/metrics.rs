use std::sync::atomic::{AtomicUsize, Ordering};

///
/// Process-wide counters describing the raster images that have been generated
///
pub struct RasterMetrics {
    images_created:     AtomicUsize,
    images_live:        AtomicUsize,
    rasterizations:     AtomicUsize,
    filter_runs:        AtomicUsize,
}

///
/// The values of the raster metrics at a particular moment
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RasterMetricsSnapshot {
    /// Number of images that have been created (including copies and images generated by rotation)
    pub images_created:     usize,

    /// Number of images that currently exist
    pub images_live:        usize,

    /// Number of times a shape has been rasterized into a pixel buffer
    pub rasterizations:     usize,

    /// Number of times a filter stage has been applied to an image
    pub filter_runs:        usize,
}

static RASTER_METRICS: RasterMetrics = RasterMetrics {
    images_created:     AtomicUsize::new(0),
    images_live:        AtomicUsize::new(0),
    rasterizations:     AtomicUsize::new(0),
    filter_runs:        AtomicUsize::new(0),
};

impl RasterMetrics {
    ///
    /// The metrics for this process
    ///
    #[inline]
    pub fn global() -> &'static RasterMetrics {
        &RASTER_METRICS
    }

    ///
    /// Reads the current values of the metrics
    ///
    pub fn snapshot(&self) -> RasterMetricsSnapshot {
        RasterMetricsSnapshot {
            images_created: self.images_created.load(Ordering::Relaxed),
            images_live:    self.images_live.load(Ordering::Relaxed),
            rasterizations: self.rasterizations.load(Ordering::Relaxed),
            filter_runs:    self.filter_runs.load(Ordering::Relaxed),
        }
    }

    #[inline]
    pub(crate) fn image_created(&self) {
        self.images_created.fetch_add(1, Ordering::Relaxed);
        self.images_live.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn image_dropped(&self) {
        self.images_live.fetch_sub(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn rasterized(&self) {
        self.rasterizations.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn filter_applied(&self) {
        self.filter_runs.fetch_add(1, Ordering::Relaxed);
    }
}
