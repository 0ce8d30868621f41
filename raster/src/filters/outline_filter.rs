use super::filter_stage_trait::*;

use crate::image::*;
use crate::pixel::*;

use itertools::iproduct;

///
/// Draws an outline around the inside edge of the opaque parts of an image
///
/// A pixel is on the edge if it's part of the shape and one of its four neighbours is transparent,
/// already part of the outline or outside of the image. Each time this filter runs the outline grows
/// one pixel further into the shape, so replaying it on a copied image produces a thicker outline.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineFilter {
    color: U8RgbaPixel,
}

impl OutlineFilter {
    ///
    /// Creates an outline filter that draws in the specified colour
    ///
    pub fn with_color(color: U8RgbaPixel) -> Self {
        OutlineFilter { color }
    }
}

impl FilterStage for OutlineFilter {
    fn apply(&self, image: &mut RasterImage) {
        let width   = image.width();
        let height  = image.height();
        let color   = self.color;

        // Pixels outside of the shape (read before anything is changed so each pass adds exactly one pixel)
        let buffer  = image.buffer();
        let clear   = |x: usize, y: usize| {
            let pixel = buffer.pixel(x, y);
            pixel.is_transparent() || pixel == color
        };
        let edges   = iproduct!(0..height, 0..width)
            .filter(|(y, x)| !clear(*x, *y))
            .filter(|(y, x)| {
                let (x, y) = (*x, *y);

                x == 0 || y == 0 || x+1 == width || y+1 == height
                    || clear(x-1, y) || clear(x+1, y) || clear(x, y-1) || clear(x, y+1)
            })
            .collect::<Vec<_>>();

        let buffer  = image.buffer_mut();
        for (y, x) in edges {
            buffer.set_pixel(x, y, color);
        }
    }
}
