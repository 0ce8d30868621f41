use crate::level::*;

use flo_raster::*;

use thiserror::Error;

///
/// Errors that can occur while driving a scene
///
#[derive(Debug, Error)]
pub enum SceneError {
    /// A frame was forwarded to a level that hasn't been added to the level manager
    #[error("No level has been registered with ID {0:?}")]
    UnknownLevel(LevelId),

    /// An image could not be generated
    #[error("Could not generate an image: {0}")]
    Raster(#[from] RasterError),

    /// The scene settings could not be read or written
    #[error("Invalid scene settings: {0}")]
    Settings(#[from] serde_json::Error),
}
