mod render_context_trait;
mod canvas_render_context;
mod raster_frame;

pub use render_context_trait::*;
pub use canvas_render_context::*;
pub use raster_frame::*;
