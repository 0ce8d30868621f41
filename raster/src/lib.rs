//!
//! # flo_raster
//!
//! `flo_raster` turns 2D shapes into sprite images by rasterizing them directly into pixel buffers.
//!
//! A `RasterImage` is generated from any type implementing `ShapeGeometry` at a given `RenderScale`:
//! every pixel is either the fill colour or fully transparent. Images record the `FilterStage`s that
//! are applied to them, so that when an image is copied or rotated the filters can be replayed over
//! the newly generated pixels. Rotation never resamples the existing pixels: the original shape is
//! rotated and rasterized again, so repeated rotations do not accumulate blur.
//!
//! Rendering goes through the `RenderContext` trait. Two implementations are supplied:
//! `CanvasRenderContext`, which sends the images as textures to any `flo_canvas` graphics context,
//! and `RasterFrame`, a software frame buffer that can also be written out as a PNG file.
//!
//! # Features
//!
//! * `render_png` - adds `RasterFrame::write_png()`
//! * `multithreading` - rasterizes the rows of large images in parallel using rayon
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod error;
mod scale;
mod metrics;

/// Shapes, bounding boxes and the affine transforms that can be applied to them
pub mod geometry;

/// Pixel formats and the buffers that store them
pub mod pixel;

/// The rasterized sprite image
pub mod image;

/// Filters that post-process a rasterized image
pub mod filters;

/// Targets that rasterized images can be drawn to
pub mod render;

pub use self::error::*;
pub use self::scale::*;
pub use self::metrics::*;

pub use self::geometry::*;
pub use self::pixel::*;
pub use self::image::*;
pub use self::filters::*;
pub use self::render::*;

pub use flo_canvas as canvas;
