use crate::error::*;
use crate::level::*;
use crate::key_mapping::*;
use crate::settings::*;

use flo_raster::*;

use tracing::{info, warn};

use std::collections::{HashMap};

///
/// Owns the levels in a scene and forwards each frame to whichever one is current
///
/// The level manager also owns the key mapping and the render scale that images should be generated at.
///
pub struct LevelManager {
    /// The levels that have been registered
    levels:         HashMap<LevelId, Box<dyn Level>>,

    /// The level that frames are sent to
    current_level:  LevelId,

    /// The actions that are bound to keys
    keys:           KeyMapping,

    /// The scale that levels should use when generating images
    scale:          RenderScale,
}

impl LevelManager {
    ///
    /// Creates a level manager with the default key bindings and a scale of 1
    ///
    pub fn new() -> LevelManager {
        LevelManager {
            levels:         HashMap::new(),
            current_level:  LevelId::default(),
            keys:           KeyMapping::default(),
            scale:          RenderScale::default(),
        }
    }

    ///
    /// Creates a level manager configured by some scene settings
    ///
    pub fn from_settings(settings: &SceneSettings) -> Result<LevelManager, SceneError> {
        Ok(LevelManager {
            levels:         HashMap::new(),
            current_level:  settings.initial_level,
            keys:           settings.key_mapping(),
            scale:          settings.scale.validated()?,
        })
    }

    ///
    /// Adds a level, replacing any level that was already registered with the same ID
    ///
    pub fn add_level<TLevel>(&mut self, level_id: LevelId, level: TLevel)
    where
        TLevel: 'static + Level,
    {
        if self.levels.insert(level_id, Box::new(level)).is_some() {
            info!(level = level_id.0, "Replaced level");
        }
    }

    ///
    /// Changes the level that frames are sent to
    ///
    /// The level doesn't have to be registered yet, but the per-frame calls will fail until it is.
    ///
    pub fn set_level(&mut self, level_id: LevelId) {
        info!(from = self.current_level.0, to = level_id.0, "Switching level");

        self.current_level = level_id;
    }

    /// The ID of the level that frames are sent to
    #[inline] pub fn current_level(&self) -> LevelId { self.current_level }

    /// True if a level has been registered with the specified ID
    #[inline] pub fn has_level(&self, level_id: LevelId) -> bool { self.levels.contains_key(&level_id) }

    #[inline] pub fn scale(&self) -> RenderScale { self.scale }

    ///
    /// Changes the scale that levels should generate their images at
    ///
    pub fn set_scale(&mut self, scale: f64) -> Result<(), SceneError> {
        self.scale = RenderScale::new(scale)?;

        Ok(())
    }

    #[inline] pub fn key_mapping(&self) -> &KeyMapping { &self.keys }
    #[inline] pub fn key_mapping_mut(&mut self) -> &mut KeyMapping { &mut self.keys }

    ///
    /// Advances the current level by one frame
    ///
    pub fn update(&mut self, input: &InputState) -> Result<(), SceneError> {
        active_level(&mut self.levels, self.current_level)?.update(input, &self.keys);

        Ok(())
    }

    ///
    /// Sends a mouse click to the user interface of the current level
    ///
    pub fn update_ui(&mut self, click: (f64, f64)) -> Result<(), SceneError> {
        active_level(&mut self.levels, self.current_level)?.update_ui(click);

        Ok(())
    }

    ///
    /// Draws the scene for the current level
    ///
    pub fn render(&mut self, context: &mut dyn RenderContext, debug: bool) -> Result<(), SceneError> {
        active_level(&mut self.levels, self.current_level)?.render(context, debug);

        Ok(())
    }

    ///
    /// Draws the user interface for the current level
    ///
    pub fn render_ui(&mut self, context: &mut dyn RenderContext, debug: bool) -> Result<(), SceneError> {
        active_level(&mut self.levels, self.current_level)?.render_ui(context, debug);

        Ok(())
    }
}

///
/// Retrieves the level with the specified ID from a set of levels
///
fn active_level(levels: &mut HashMap<LevelId, Box<dyn Level>>, level_id: LevelId) -> Result<&mut Box<dyn Level>, SceneError> {
    match levels.get_mut(&level_id) {
        Some(level) => Ok(level),
        None        => {
            warn!(level = level_id.0, "Current level has not been registered");
            Err(SceneError::UnknownLevel(level_id))
        }
    }
}

impl Default for LevelManager {
    fn default() -> LevelManager {
        LevelManager::new()
    }
}
