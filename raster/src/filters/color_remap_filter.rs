use super::filter_stage_trait::*;

use crate::image::*;
use crate::pixel::*;

///
/// Replaces every pixel of one colour with another colour
///
/// Running this filter a second time has no further effect, as long as the replacement colour is
/// not also the colour being searched for.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRemapFilter {
    from:   U8RgbaPixel,
    to:     U8RgbaPixel,
}

impl ColorRemapFilter {
    ///
    /// Creates a filter that changes pixels that exactly match `from` into `to`
    ///
    pub fn new(from: U8RgbaPixel, to: U8RgbaPixel) -> Self {
        ColorRemapFilter { from, to }
    }
}

impl FilterStage for ColorRemapFilter {
    fn apply(&self, image: &mut RasterImage) {
        for pixel in image.buffer_mut().pixels_mut().iter_mut() {
            if *pixel == self.from {
                *pixel = self.to;
            }
        }
    }
}
