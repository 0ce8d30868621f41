use super::affine::*;
use super::bounds::*;

use std::fmt;
use std::sync::*;

///
/// A 2D region that can be rasterized
///
/// Shapes are immutable values: `transformed()` always returns a new shape and leaves the original
/// untouched. This means a single shape can be shared between many images (including images on
/// other threads) without any of them seeing changes made by the others.
///
pub trait ShapeGeometry : Send + Sync + fmt::Debug {
    ///
    /// True if the specified point is inside this shape
    ///
    fn contains(&self, x: f64, y: f64) -> bool;

    ///
    /// The smallest axis-aligned box that encloses this shape
    ///
    fn bounding_box(&self) -> ShapeBounds;

    ///
    /// Creates a new shape by applying a transform to this one
    ///
    fn transformed(&self, transform: &Affine2D) -> SharedShape;
}

///
/// A shape that can be shared between several images
///
pub type SharedShape = Arc<dyn ShapeGeometry>;
