mod u8_rgba;
mod raster_buffer;

pub use u8_rgba::*;
pub use raster_buffer::*;
