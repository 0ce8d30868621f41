use super::filter_stage_trait::*;

use crate::image::*;

///
/// The alpha blend filter
///
/// Multiplies the alpha value of every pixel, so applying it twice makes the image fainter again
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaBlendFilter {
    alpha: f64,
}

impl AlphaBlendFilter {
    ///
    /// Creates an alpha blend filter that will adjust the alpha value of its target by the specified amount (clamped to 0..1)
    ///
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0)
        }
    }
}

impl FilterStage for AlphaBlendFilter {
    fn apply(&self, image: &mut RasterImage) {
        for pixel in image.buffer_mut().pixels_mut().iter_mut() {
            let alpha = ((pixel.alpha() as f64) * self.alpha).round() as u8;
            *pixel = pixel.with_alpha(alpha);
        }
    }
}
