use std::ops::{Mul};

///
/// An affine transform for 2D points, as a 3x3 matrix
///
/// A point `(x, y)` is transformed as the column vector `(x, y, 1)`, so `a * b` is the transform that
/// applies `b` first and then `a`.
///
/// Rotations are counter-clockwise for positive angles in a y-up coordinate scheme, which means they
/// appear clockwise on a screen where y increases downwards. This is the same convention used by
/// joint rotation, so images and skeletons always turn the same way.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Affine2D(pub [[f64; 3]; 3]);

impl Affine2D {
    ///
    /// The identity transform
    ///
    #[inline]
    pub fn identity() -> Affine2D {
        Affine2D([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0]
        ])
    }

    ///
    /// A transform that moves points by the specified offset
    ///
    #[inline]
    pub fn translate(dx: f64, dy: f64) -> Affine2D {
        Affine2D([
            [1.0, 0.0, dx],
            [0.0, 1.0, dy],
            [0.0, 0.0, 1.0]
        ])
    }

    ///
    /// A transform that scales points about the origin
    ///
    #[inline]
    pub fn scale(sx: f64, sy: f64) -> Affine2D {
        Affine2D([
            [sx,  0.0, 0.0],
            [0.0, sy,  0.0],
            [0.0, 0.0, 1.0]
        ])
    }

    ///
    /// A transform that rotates points about the origin by an angle in radians
    ///
    /// Quarter turns produce exact 0 and ±1 entries, so rotating integer coordinates by a multiple of
    /// 90 degrees produces integer coordinates.
    ///
    #[inline]
    pub fn rotate(radians: f64) -> Affine2D {
        let (sin, cos) = radians.sin_cos();
        let sin        = snap_unit(sin);
        let cos        = snap_unit(cos);

        Affine2D([
            [cos, -sin, 0.0],
            [sin, cos,  0.0],
            [0.0, 0.0,  1.0]
        ])
    }

    ///
    /// A transform that rotates points about a pivot point by an angle in radians
    ///
    #[inline]
    pub fn rotate_about(radians: f64, pivot_x: f64, pivot_y: f64) -> Affine2D {
        Affine2D::translate(pivot_x, pivot_y) * Affine2D::rotate(radians) * Affine2D::translate(-pivot_x, -pivot_y)
    }

    ///
    /// Applies this transform to a point
    ///
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let Affine2D(m) = self;

        (
            m[0][0]*x + m[0][1]*y + m[0][2],
            m[1][0]*x + m[1][1]*y + m[1][2]
        )
    }

    ///
    /// The determinant of the linear part of this transform (0 if it flattens shapes to a line or a point)
    ///
    #[inline]
    pub fn determinant(&self) -> f64 {
        let Affine2D(m) = self;

        m[0][0]*m[1][1] - m[0][1]*m[1][0]
    }

    ///
    /// True if this transform maps axis-aligned rectangles onto axis-aligned rectangles (it only scales and translates)
    ///
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        let Affine2D(m) = self;

        m[0][1] == 0.0 && m[1][0] == 0.0
    }

    ///
    /// Computes the inverse of this transform, if it has one
    ///
    pub fn invert(&self) -> Option<Affine2D> {
        let Affine2D(m) = self;
        let det         = self.determinant();

        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inv_det     = 1.0 / det;
        let a           = m[1][1] * inv_det;
        let b           = -m[0][1] * inv_det;
        let c           = -m[1][0] * inv_det;
        let d           = m[0][0] * inv_det;

        // Inverse translation is the inverse linear part applied to the negated offset
        let tx          = -(a*m[0][2] + b*m[1][2]);
        let ty          = -(c*m[0][2] + d*m[1][2]);

        Some(Affine2D([
            [a,   b,   tx],
            [c,   d,   ty],
            [0.0, 0.0, 1.0]
        ]))
    }
}

///
/// Rounds a sine or cosine that is within rounding error of 0, 1 or -1 to that value
///
#[inline]
fn snap_unit(value: f64) -> f64 {
    const EPSILON: f64 = 1e-12;

    if value.abs() < EPSILON {
        0.0
    } else if (value - 1.0).abs() < EPSILON {
        1.0
    } else if (value + 1.0).abs() < EPSILON {
        -1.0
    } else {
        value
    }
}

impl Default for Affine2D {
    #[inline]
    fn default() -> Self {
        Affine2D::identity()
    }
}

impl Mul<Affine2D> for Affine2D {
    type Output = Affine2D;

    fn mul(self, other: Affine2D) -> Affine2D {
        let Affine2D(a) = self;
        let Affine2D(b) = other;
        let mut result  = [[0.0; 3]; 3];

        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col];
            }
        }

        Affine2D(result)
    }
}
