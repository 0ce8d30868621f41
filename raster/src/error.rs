//! Errors reported while generating raster images

use thiserror::Error;

///
/// Errors that can occur when a shape is rasterized
///
/// These all indicate that the caller supplied something that can't be turned into a bitmap: a
/// rasterized image is never silently generated with a zero-sized buffer.
///
#[derive(Debug, Error)]
pub enum RasterError {
    /// The scale factor was zero, negative or not a finite number
    #[error("Invalid render scale: {0}")]
    InvalidScale(f64),

    /// The shape's bounding box (after scaling) has no area or is not finite
    #[error("Degenerate shape: scaled bounds are {width}x{height}")]
    DegenerateShape { width: f64, height: f64 },

    /// The scaled shape would need more pixels than a raster is allowed to hold
    #[error("Raster too large: {width}x{height} pixels")]
    RasterTooLarge { width: f64, height: f64 },

    /// A frame could not be written as a PNG file
    #[cfg(feature = "render_png")]
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}
