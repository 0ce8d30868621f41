///
/// An axis-aligned bounding box, as a top-left position and a size
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ShapeBounds {
    pub x:      f64,
    pub y:      f64,
    pub width:  f64,
    pub height: f64,
}

impl ShapeBounds {
    ///
    /// Creates a bounding box from its top-left corner and size
    ///
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> ShapeBounds {
        ShapeBounds { x, y, width, height }
    }

    ///
    /// Creates the smallest bounding box that encloses a set of points (an empty set produces an empty box at the origin)
    ///
    pub fn from_points(points: impl IntoIterator<Item=(f64, f64)>) -> ShapeBounds {
        let mut points  = points.into_iter();
        let (x, y)      = match points.next() {
            Some(first) => first,
            None        => { return ShapeBounds::new(0.0, 0.0, 0.0, 0.0); }
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
        for (x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        ShapeBounds::new(min_x, min_y, max_x-min_x, max_y-min_y)
    }

    #[inline] pub fn min_x(&self) -> f64 { self.x }
    #[inline] pub fn min_y(&self) -> f64 { self.y }
    #[inline] pub fn max_x(&self) -> f64 { self.x + self.width }
    #[inline] pub fn max_y(&self) -> f64 { self.y + self.height }

    #[inline] pub fn center_x(&self) -> f64 { self.x + self.width/2.0 }
    #[inline] pub fn center_y(&self) -> f64 { self.y + self.height/2.0 }

    ///
    /// True if these bounds can't enclose any area (zero or negative size, or a coordinate that's not finite)
    ///
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}
