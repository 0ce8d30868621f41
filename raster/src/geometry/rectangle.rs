use super::affine::*;
use super::bounds::*;
use super::polygon::*;
use super::shape_trait::*;

use std::sync::*;

///
/// An axis-aligned rectangle
///
/// The top and left edges are inside the rectangle and the bottom and right edges are outside, so a
/// 10x10 rectangle at the origin contains exactly the integer points `(0..10, 0..10)`.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rectangle {
    bounds: ShapeBounds,
}

impl Rectangle {
    ///
    /// Creates a rectangle from its top-left corner and its size
    ///
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rectangle {
        Rectangle { bounds: ShapeBounds::new(x, y, width, height) }
    }

    ///
    /// The corners of this rectangle, clockwise from the top-left on a y-down screen
    ///
    pub fn corners(&self) -> [(f64, f64); 4] {
        let b = &self.bounds;

        [(b.min_x(), b.min_y()), (b.max_x(), b.min_y()), (b.max_x(), b.max_y()), (b.min_x(), b.max_y())]
    }
}

impl ShapeGeometry for Rectangle {
    #[inline]
    fn contains(&self, x: f64, y: f64) -> bool {
        let b = &self.bounds;

        x >= b.min_x() && y >= b.min_y() && x < b.max_x() && y < b.max_y()
    }

    #[inline]
    fn bounding_box(&self) -> ShapeBounds {
        self.bounds
    }

    fn transformed(&self, transform: &Affine2D) -> SharedShape {
        let corners = self.corners().iter()
            .map(|(x, y)| transform.transform_point(*x, *y))
            .collect::<Vec<_>>();

        if transform.is_axis_aligned() {
            // Scaling and translating leaves us with another rectangle (which may have been mirrored, so recompute the top-left)
            let bounds = ShapeBounds::from_points(corners);
            Arc::new(Rectangle { bounds })
        } else {
            Arc::new(Polygon::new(corners))
        }
    }
}
