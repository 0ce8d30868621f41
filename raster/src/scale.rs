use crate::error::*;

///
/// The scale context for a set of images
///
/// A single scale factor is shared by every image generated for a scene: shapes are described in
/// scene units and multiplied by this value when they are rasterized. The scale is applied once at
/// rasterization time, so changing it only affects images that are generated afterwards.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderScale(pub f64);

impl RenderScale {
    ///
    /// Creates a render scale, checking that it can be used to generate images
    ///
    pub fn new(scale: f64) -> Result<RenderScale, RasterError> {
        RenderScale(scale).validated()
    }

    ///
    /// The scale factor as a number
    ///
    #[inline]
    pub fn factor(&self) -> f64 {
        self.0
    }

    ///
    /// Returns this scale if it's finite and positive, or an error otherwise
    ///
    pub fn validated(self) -> Result<RenderScale, RasterError> {
        if self.0.is_finite() && self.0 > 0.0 {
            Ok(self)
        } else {
            Err(RasterError::InvalidScale(self.0))
        }
    }
}

impl Default for RenderScale {
    #[inline]
    fn default() -> Self {
        RenderScale(1.0)
    }
}
