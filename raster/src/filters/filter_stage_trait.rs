use crate::image::*;

///
/// A filter stage post-processes the pixels of a rasterized image
///
/// Images remember the filter stages applied to them and run them again whenever their pixels are
/// regenerated, so a stage must only change the image it's passed. The same stage can be shared
/// between many images (and threads), which is why stages are `Send + Sync` and take `&self`.
///
pub trait FilterStage : Send + Sync {
    ///
    /// Applies this filter to the pixels of an image
    ///
    fn apply(&self, image: &mut RasterImage);
}

impl<TFn> FilterStage for TFn
where
    TFn: Send + Sync + Fn(&mut RasterImage),
{
    #[inline]
    fn apply(&self, image: &mut RasterImage) {
        (self)(image)
    }
}
