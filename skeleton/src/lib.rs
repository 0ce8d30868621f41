//!
//! # flo_skeleton
//!
//! `flo_skeleton` builds 2D skeletons out of `Joint`s. Each joint has a position, a list of child
//! joints and a list of `RasterImage`s that are drawn centered on it. Rotating a joint swings its
//! whole subtree around it, regenerating the attached images at their new angle, so limbs can be
//! posed without any of the sprites being drawn by hand.
//!
//! Skeletons are usually driven by a `LevelManager`, which forwards the per-frame update and render
//! calls to whichever `Level` is current, along with the `InputState` and `KeyMapping` for the
//! frame. `SceneSettings` can be loaded from JSON to configure the scale, debug drawing and key
//! bindings.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod error;
mod metrics;
mod joint;
mod rotation;
mod level;
mod key_mapping;
mod level_manager;
mod settings;

pub use self::error::*;
pub use self::metrics::*;
pub use self::joint::*;
pub use self::rotation::*;
pub use self::level::*;
pub use self::key_mapping::*;
pub use self::level_manager::*;
pub use self::settings::*;

pub use flo_raster as raster;
