use crate::key_mapping::*;

use flo_raster::*;

///
/// Identifies a level that can be registered with a `LevelManager`
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct LevelId(pub u64);

///
/// Trait implemented by a level (a screen such as a menu or a stage of a game) that can be driven by a `LevelManager`
///
/// The UI methods are called separately so that a level can draw an overlay on top of the scene. They do nothing by default.
///
pub trait Level {
    ///
    /// Advances the level by one frame
    ///
    fn update(&mut self, input: &InputState, keys: &KeyMapping);

    ///
    /// Updates the user interface after a mouse click at the specified position
    ///
    fn update_ui(&mut self, _click: (f64, f64)) { }

    ///
    /// Draws the scene for this level
    ///
    fn render(&mut self, context: &mut dyn RenderContext, debug: bool);

    ///
    /// Draws the user interface for this level
    ///
    fn render_ui(&mut self, _context: &mut dyn RenderContext, _debug: bool) { }
}
