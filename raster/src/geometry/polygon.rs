use super::affine::*;
use super::bounds::*;
use super::shape_trait::*;

use smallvec::*;

use std::sync::*;

///
/// A closed polygon made up of straight edges between a list of points
///
/// Containment uses the even-odd rule. Points exactly on an edge are inside for edges on the top or
/// left of the polygon and outside for edges on the bottom or right, which matches `Rectangle`.
///
#[derive(Clone, PartialEq, Debug)]
pub struct Polygon {
    points: SmallVec<[(f64, f64); 8]>,
    bounds: ShapeBounds,
}

impl Polygon {
    ///
    /// Creates a polygon from its vertices (the last point is joined back to the first)
    ///
    pub fn new(points: impl IntoIterator<Item=(f64, f64)>) -> Polygon {
        let points = points.into_iter().collect::<SmallVec<[_; 8]>>();
        let bounds = ShapeBounds::from_points(points.iter().cloned());

        Polygon { points, bounds }
    }

    ///
    /// The vertices of this polygon
    ///
    #[inline]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl ShapeGeometry for Polygon {
    fn contains(&self, x: f64, y: f64) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        // Count the edges crossed by a ray heading right from the point
        let mut inside  = false;
        let mut last    = self.points[self.points.len()-1];

        for point in self.points.iter() {
            let (x1, y1) = last;
            let (x2, y2) = *point;

            if (y1 > y) != (y2 > y) {
                let intercept_x = x1 + (y-y1) * (x2-x1) / (y2-y1);
                if x < intercept_x {
                    inside = !inside;
                }
            }

            last = *point;
        }

        inside
    }

    #[inline]
    fn bounding_box(&self) -> ShapeBounds {
        self.bounds
    }

    fn transformed(&self, transform: &Affine2D) -> SharedShape {
        Arc::new(Polygon::new(self.points.iter().map(|(x, y)| transform.transform_point(*x, *y))))
    }
}
