mod rasterize;
mod raster_image;

pub use rasterize::{MAX_RASTER_PIXELS};
pub use raster_image::*;
