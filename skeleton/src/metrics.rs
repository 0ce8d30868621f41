use std::sync::atomic::{AtomicUsize, Ordering};

///
/// Process-wide counters describing the joints that have been created
///
pub struct SkeletonMetrics {
    joints_created:     AtomicUsize,
    joints_live:        AtomicUsize,
    subtree_rotations:  AtomicUsize,
}

///
/// The values of the skeleton metrics at a particular moment
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SkeletonMetricsSnapshot {
    /// Number of joints that have been created, including copies
    pub joints_created:     usize,

    /// Number of joints that currently exist
    pub joints_live:        usize,

    /// Number of times `Joint::rotate` has been called
    pub subtree_rotations:  usize,
}

static SKELETON_METRICS: SkeletonMetrics = SkeletonMetrics {
    joints_created:     AtomicUsize::new(0),
    joints_live:        AtomicUsize::new(0),
    subtree_rotations:  AtomicUsize::new(0),
};

impl SkeletonMetrics {
    ///
    /// The metrics for this process
    ///
    #[inline]
    pub fn global() -> &'static SkeletonMetrics {
        &SKELETON_METRICS
    }

    ///
    /// Reads the current values of the metrics
    ///
    pub fn snapshot(&self) -> SkeletonMetricsSnapshot {
        SkeletonMetricsSnapshot {
            joints_created:     self.joints_created.load(Ordering::Relaxed),
            joints_live:        self.joints_live.load(Ordering::Relaxed),
            subtree_rotations:  self.subtree_rotations.load(Ordering::Relaxed),
        }
    }

    #[inline]
    pub(crate) fn joint_created(&self) {
        self.joints_created.fetch_add(1, Ordering::Relaxed);
        self.joints_live.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn joint_dropped(&self) {
        self.joints_live.fetch_sub(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn subtree_rotated(&self) {
        self.subtree_rotations.fetch_add(1, Ordering::Relaxed);
    }
}
