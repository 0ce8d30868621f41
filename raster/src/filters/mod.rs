mod filter_stage_trait;
mod color_remap_filter;
mod outline_filter;
mod alpha_blend_filter;

pub use filter_stage_trait::*;
pub use color_remap_filter::*;
pub use outline_filter::*;
pub use alpha_blend_filter::*;
