use crate::error::*;
use crate::level::*;
use crate::key_mapping::*;

use flo_raster::*;

use std::collections::{BTreeMap};
use std::io::{Read, Write};

///
/// Settings for a scene that can be loaded from or saved to JSON
///
/// Every field is optional in the JSON form. Key bindings are applied on top of the default key mapping,
/// so a settings file only needs to list the keys that it changes.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// The scale that images are generated at
    pub scale:          RenderScale,

    /// True if debug markers should be drawn
    pub debug:          bool,

    /// Key bindings that replace the defaults (action name to scancode)
    pub key_bindings:   BTreeMap<String, u64>,

    /// The level to show when the scene starts
    pub initial_level:  LevelId,
}

impl Default for SceneSettings {
    fn default() -> SceneSettings {
        SceneSettings {
            scale:          RenderScale::default(),
            debug:          false,
            key_bindings:   BTreeMap::new(),
            initial_level:  LevelId::default(),
        }
    }
}

impl SceneSettings {
    ///
    /// Reads settings from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<SceneSettings, SceneError> {
        let settings: SceneSettings = serde_json::from_str(json)?;
        settings.scale.validated()?;

        Ok(settings)
    }

    ///
    /// Reads settings from a stream containing JSON
    ///
    pub fn from_reader<TStream>(stream: TStream) -> Result<SceneSettings, SceneError>
    where
        TStream: Read,
    {
        let settings: SceneSettings = serde_json::from_reader(stream)?;
        settings.scale.validated()?;

        Ok(settings)
    }

    ///
    /// Converts these settings to a JSON string
    ///
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    ///
    /// Writes these settings as JSON to a stream
    ///
    pub fn to_writer<TStream>(&self, stream: TStream) -> Result<(), SceneError>
    where
        TStream: Write,
    {
        Ok(serde_json::to_writer_pretty(stream, self)?)
    }

    ///
    /// The key mapping described by these settings (the default mapping with the bindings from the settings applied)
    ///
    pub fn key_mapping(&self) -> KeyMapping {
        let mut keys = KeyMapping::default();

        for (action, scancode) in self.key_bindings.iter() {
            keys.set_key(action.clone(), *scancode);
        }

        keys
    }
}
