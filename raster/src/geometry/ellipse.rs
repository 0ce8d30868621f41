use super::affine::*;
use super::bounds::*;
use super::shape_trait::*;

use std::sync::*;

///
/// An ellipse, stored as the image of the unit circle under an affine transform
///
/// Storing the transform rather than a center and radii means that rotated, sheared or scaled
/// ellipses stay exact: no flattening into line segments is needed.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ellipse {
    /// Maps the unit circle onto this ellipse
    unit_transform: Affine2D,

    /// Maps points back onto the unit circle (None if the ellipse has been flattened into a line)
    inverse:        Option<Affine2D>,
}

impl Ellipse {
    ///
    /// Creates an axis-aligned ellipse that fills the specified bounding box
    ///
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Ellipse {
        let unit_transform = Affine2D::translate(x + width/2.0, y + height/2.0) * Affine2D::scale(width/2.0, height/2.0);

        Ellipse::from_unit_transform(unit_transform)
    }

    ///
    /// Creates a circle with the specified center and radius
    ///
    pub fn circle(center_x: f64, center_y: f64, radius: f64) -> Ellipse {
        Ellipse::new(center_x - radius, center_y - radius, radius*2.0, radius*2.0)
    }

    ///
    /// Creates the ellipse that is the result of applying a transform to the unit circle
    ///
    pub fn from_unit_transform(unit_transform: Affine2D) -> Ellipse {
        Ellipse {
            unit_transform: unit_transform,
            inverse:        unit_transform.invert(),
        }
    }
}

impl ShapeGeometry for Ellipse {
    fn contains(&self, x: f64, y: f64) -> bool {
        match &self.inverse {
            Some(inverse) => {
                let (u, v) = inverse.transform_point(x, y);
                u*u + v*v < 1.0
            }

            None => false
        }
    }

    fn bounding_box(&self) -> ShapeBounds {
        let Affine2D(m) = &self.unit_transform;

        // The extremes of (a*cos(t) + b*sin(t)) are +/- sqrt(a^2 + b^2)
        let half_width  = (m[0][0]*m[0][0] + m[0][1]*m[0][1]).sqrt();
        let half_height = (m[1][0]*m[1][0] + m[1][1]*m[1][1]).sqrt();
        let center_x    = m[0][2];
        let center_y    = m[1][2];

        ShapeBounds::new(center_x - half_width, center_y - half_height, half_width*2.0, half_height*2.0)
    }

    fn transformed(&self, transform: &Affine2D) -> SharedShape {
        Arc::new(Ellipse::from_unit_transform(*transform * self.unit_transform))
    }
}
