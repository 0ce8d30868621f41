use super::rasterize::*;

use crate::error::*;
use crate::scale::*;
use crate::metrics::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::filters::*;
use crate::render::*;

use tracing::{debug, trace};

use std::fmt;
use std::mem;
use std::sync::*;

///
/// A sprite image generated by rasterizing a shape
///
/// The pixels of an image are generated from a shape, a fill colour and the scale context when the
/// image is created. Filters added to the image are applied immediately and also remembered, so
/// that they can be replayed whenever the image has to be generated again (when it's copied or
/// rotated). Rotation always starts from the original shape, so rotating an image several times
/// produces the same result as rotating it once by the total angle.
///
pub struct RasterImage {
    /// The shape that this image was generated from
    shape:          SharedShape,

    /// The shape before any rotations were applied
    original_shape: SharedShape,

    /// The pixels making up this image
    buffer:         RasterBuffer,

    /// The filters that have been applied to this image, in order
    filters:        Vec<Arc<dyn FilterStage>>,

    /// The colour that the inside of the shape is filled with
    color:          U8RgbaPixel,

    /// The scale the shape is rasterized at
    scale:          RenderScale,

    /// Top-left corner where the image is drawn
    x:              f64,
    y:              f64,

    /// Total rotation (in radians) applied to the original shape
    rotation:       f64,
}

impl RasterImage {
    ///
    /// Creates an image by filling in a shape with a colour
    ///
    /// The shape is multiplied by the scale before it's rasterized. Pixels inside the scaled shape are
    /// set to the fill colour and all other pixels are left fully transparent.
    ///
    pub fn new(shape: SharedShape, color: U8RgbaPixel, scale: RenderScale) -> Result<RasterImage, RasterError> {
        let buffer = rasterize_shape(&*shape, color, scale)?;

        Ok(RasterImage::from_parts(shape.clone(), shape, buffer, color, scale))
    }

    ///
    /// Creates an image from a shape value that isn't shared yet
    ///
    pub fn from_shape<TShape>(shape: TShape, color: U8RgbaPixel, scale: RenderScale) -> Result<RasterImage, RasterError>
    where
        TShape: 'static + ShapeGeometry,
    {
        RasterImage::new(Arc::new(shape), color, scale)
    }

    fn from_parts(shape: SharedShape, original_shape: SharedShape, buffer: RasterBuffer, color: U8RgbaPixel, scale: RenderScale) -> RasterImage {
        RasterMetrics::global().image_created();

        RasterImage {
            shape:          shape,
            original_shape: original_shape,
            buffer:         buffer,
            filters:        vec![],
            color:          color,
            scale:          scale,
            x:              0.0,
            y:              0.0,
            rotation:       0.0,
        }
    }

    ///
    /// Makes a copy of this image
    ///
    /// The pixels are copied and then every filter is applied to the copy again: filters that change
    /// the image every time they're run (such as outlines) will have a stronger effect on the copy
    /// than on the original.
    ///
    pub fn copy(&self) -> RasterImage {
        let mut copy        = RasterImage::from_parts(self.shape.clone(), self.original_shape.clone(), self.buffer.clone(), self.color, self.scale);
        copy.x              = self.x;
        copy.y              = self.y;
        copy.rotation       = self.rotation;

        for filter in self.filters.iter() {
            copy.add_filter(Arc::clone(filter));
        }

        copy
    }

    ///
    /// Rotates this image by an angle in degrees
    ///
    /// The pixels are not rotated: instead the original shape is rotated by the total angle about the
    /// center of its bounding box and rasterized again, and the filters are replayed over the result.
    /// The image's position is reset to that of the newly generated raster, so it will need to be
    /// re-anchored (a joint does this every time it's rendered).
    ///
    /// If the rotated shape can't be rasterized, the image is left exactly as it was, including its
    /// total rotation.
    ///
    pub fn rotate(&mut self, degrees: f64) -> Result<(), RasterError> {
        let total           = self.rotation + degrees.to_radians();

        let original_bounds = self.original_shape.bounding_box();
        let rotate          = Affine2D::rotate_about(total, original_bounds.center_x(), original_bounds.center_y());
        let rotated_shape   = self.original_shape.transformed(&rotate);

        // Rotation moves the bounding box away from the origin: the regenerated shape is always re-anchored at (0, 0)
        let rotated_bounds  = rotated_shape.bounding_box();
        let anchor          = Affine2D::translate(-rotated_bounds.min_x(), -rotated_bounds.min_y());
        let rotated_shape   = rotated_shape.transformed(&anchor);

        debug!(degrees, total_radians = total, "Regenerating rotated image");

        let mut rotated     = RasterImage::new(rotated_shape, self.color, self.scale)?;
        for filter in self.filters.iter() {
            rotated.add_filter(Arc::clone(filter));
        }

        // The visible pixels are for the rotated shape, but the recorded shape stays as the unrotated original
        self.buffer         = mem::take(&mut rotated.buffer);
        self.x              = rotated.x;
        self.y              = rotated.y;
        self.shape          = Arc::clone(&self.original_shape);
        self.rotation       = total;

        Ok(())
    }

    ///
    /// Mirrors the image left-to-right
    ///
    #[inline]
    pub fn flip_x(&mut self) {
        self.buffer.flip_x();
    }

    ///
    /// Mirrors the image top-to-bottom
    ///
    #[inline]
    pub fn flip_y(&mut self) {
        self.buffer.flip_y();
    }

    ///
    /// Applies a filter to this image and remembers it so it's applied again when the image is copied or rotated
    ///
    pub fn add_filter(&mut self, filter: Arc<dyn FilterStage>) {
        trace!(filter_count = self.filters.len() + 1, "Applying filter stage");

        filter.apply(self);
        RasterMetrics::global().filter_applied();

        self.filters.push(filter);
    }

    ///
    /// Draws this image at its current position
    ///
    /// The debug flag is passed through for diagnostic overlays but doesn't currently draw anything extra
    ///
    pub fn render<TContext>(&self, context: &mut TContext, _debug: bool)
    where
        TContext: ?Sized + RenderContext,
    {
        context.draw_raster(&self.buffer, self.x.floor() as i32, self.y.floor() as i32, self.width(), self.height());
    }

    ///
    /// Half the width of the image in whole pixels
    ///
    #[inline]
    fn half_width(&self) -> f64 {
        (self.buffer.width() / 2) as f64
    }

    ///
    /// Half the height of the image in whole pixels
    ///
    #[inline]
    fn half_height(&self) -> f64 {
        (self.buffer.height() / 2) as f64
    }

    /// The x coordinate of the top-left corner of the image
    #[inline] pub fn x(&self) -> f64 { self.x }

    /// The y coordinate of the top-left corner of the image
    #[inline] pub fn y(&self) -> f64 { self.y }

    ///
    /// Moves the image so that its center is at the specified x coordinate
    ///
    /// Note that this takes a center coordinate while `x()` returns the top-left coordinate
    ///
    #[inline]
    pub fn set_x(&mut self, center_x: f64) {
        self.x = center_x - self.half_width();
    }

    ///
    /// Moves the image so that its center is at the specified y coordinate
    ///
    /// Note that this takes a center coordinate while `y()` returns the top-left coordinate
    ///
    #[inline]
    pub fn set_y(&mut self, center_y: f64) {
        self.y = center_y - self.half_height();
    }

    #[inline] pub fn center_x(&self) -> f64 { self.x + self.half_width() }
    #[inline] pub fn center_y(&self) -> f64 { self.y + self.half_height() }

    #[inline] pub fn width(&self) -> usize  { self.buffer.width() }
    #[inline] pub fn height(&self) -> usize { self.buffer.height() }

    ///
    /// The shape recorded for this image
    ///
    /// After a rotation this is still the unrotated original shape, even though the pixels show the rotated version.
    ///
    #[inline]
    pub fn shape(&self) -> &SharedShape {
        &self.shape
    }

    ///
    /// Replaces the recorded shape (the pixels are not regenerated)
    ///
    #[inline]
    pub fn set_shape(&mut self, shape: SharedShape) {
        self.shape = shape;
    }

    /// The shape this image was created from, before any rotations
    #[inline] pub fn original_shape(&self) -> &SharedShape { &self.original_shape }

    /// The total rotation applied to this image, in radians
    #[inline] pub fn rotation(&self) -> f64 { self.rotation }

    #[inline] pub fn fill_color(&self) -> U8RgbaPixel { self.color }
    #[inline] pub fn scale(&self) -> RenderScale { self.scale }

    /// The filters that have been applied to this image
    #[inline] pub fn filters(&self) -> &[Arc<dyn FilterStage>] { &self.filters }

    #[inline] pub fn buffer(&self) -> &RasterBuffer { &self.buffer }
    #[inline] pub fn buffer_mut(&mut self) -> &mut RasterBuffer { &mut self.buffer }

    #[inline] pub fn pixel(&self, x: usize, y: usize) -> U8RgbaPixel { self.buffer.pixel(x, y) }
    #[inline] pub fn set_pixel(&mut self, x: usize, y: usize, pixel: U8RgbaPixel) { self.buffer.set_pixel(x, y, pixel) }
}

impl Drop for RasterImage {
    fn drop(&mut self) {
        RasterMetrics::global().image_dropped();
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("RasterImage")
            .field("shape", &self.shape)
            .field("width", &self.width())
            .field("height", &self.height())
            .field("color", &self.color)
            .field("filters", &self.filters.len())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("rotation", &self.rotation)
            .finish()
    }
}
