use crate::error::*;
use crate::scale::*;
use crate::metrics::*;
use crate::geometry::*;
use crate::pixel::*;

#[cfg(feature = "multithreading")] use rayon::prelude::*;

use tracing::{debug};

///
/// The largest number of pixels a single raster image can contain
///
pub const MAX_RASTER_PIXELS: usize = 1 << 26;

///
/// Scales a shape by the render scale and works out the size of the buffer it will be drawn into
///
/// Returns the scaled shape and its bounds (the buffer is `ceil(width)` x `ceil(height)` pixels)
///
pub(crate) fn scale_shape(shape: &dyn ShapeGeometry, scale: RenderScale) -> Result<(SharedShape, ShapeBounds), RasterError> {
    let scale   = scale.validated()?;
    let scaled  = shape.transformed(&Affine2D::scale(scale.factor(), scale.factor()));
    let bounds  = scaled.bounding_box();

    if bounds.is_degenerate() {
        return Err(RasterError::DegenerateShape { width: bounds.width, height: bounds.height });
    }

    let width   = bounds.width.ceil();
    let height  = bounds.height.ceil();
    if width * height > MAX_RASTER_PIXELS as f64 {
        return Err(RasterError::RasterTooLarge { width, height });
    }

    Ok((scaled, bounds))
}

///
/// Fills in a single row of a raster by testing each pixel against a shape
///
#[inline]
fn rasterize_row(scaled: &dyn ShapeGeometry, bounds: &ShapeBounds, y_pos: usize, row: &mut [U8RgbaPixel], color: U8RgbaPixel) {
    // Sample points are at integer offsets from the top-left of the scaled bounds
    let sample_y = bounds.min_y() + (y_pos as f64);

    for (x_pos, pixel) in row.iter_mut().enumerate() {
        let sample_x = bounds.min_x() + (x_pos as f64);

        *pixel = if scaled.contains(sample_x, sample_y) {
            color
        } else {
            U8RgbaPixel::TRANSPARENT
        };
    }
}

///
/// Rasterizes a shape at a particular scale, producing a buffer where every pixel is either the fill colour or transparent
///
pub(crate) fn rasterize_shape(shape: &dyn ShapeGeometry, color: U8RgbaPixel, scale: RenderScale) -> Result<RasterBuffer, RasterError> {
    let (scaled, bounds)    = scale_shape(shape, scale)?;
    let width               = bounds.width.ceil() as usize;
    let height              = bounds.height.ceil() as usize;
    let mut buffer          = RasterBuffer::new(width, height);

    debug!(width, height, scale = scale.factor(), "Rasterizing shape");

    #[cfg(feature = "multithreading")]
    {
        buffer.pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y_pos, row)| rasterize_row(&*scaled, &bounds, y_pos, row, color));
    }

    #[cfg(not(feature = "multithreading"))]
    {
        buffer.pixels_mut()
            .chunks_mut(width)
            .enumerate()
            .for_each(|(y_pos, row)| rasterize_row(&*scaled, &bounds, y_pos, row, color));
    }

    RasterMetrics::global().rasterized();

    Ok(buffer)
}
