use crate::pixel::*;

/// Diameter of the marker drawn at each joint when debugging
pub const DEBUG_MARKER_DIAMETER: f64 = 6.0;

/// Colour of the marker drawn at each joint when debugging
pub const DEBUG_MARKER_COLOR: U8RgbaPixel = U8RgbaPixel([0, 255, 0, 255]);

///
/// A render context is something that raster images and debugging markers can be drawn on
///
pub trait RenderContext {
    ///
    /// Draws a buffer of pixels with its top-left corner at `(x, y)`, stretched to `width` x `height` pixels
    ///
    fn draw_raster(&mut self, raster: &RasterBuffer, x: i32, y: i32, width: usize, height: usize);

    ///
    /// Draws the outline of a small circle centered on a point
    ///
    fn draw_marker(&mut self, center_x: f64, center_y: f64, diameter: f64, color: U8RgbaPixel);
}
