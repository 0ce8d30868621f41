use smallvec::*;

use std::collections::{HashMap};

///
/// Maps the names of actions (such as 'Jump') to the scancodes of the keys that trigger them
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct KeyMapping {
    keys: HashMap<String, u64>,
}

impl KeyMapping {
    ///
    /// Creates a key mapping with no bindings
    ///
    pub fn empty() -> KeyMapping {
        KeyMapping { keys: HashMap::new() }
    }

    ///
    /// Binds an action to a key, replacing any existing binding for that action
    ///
    pub fn set_key(&mut self, action: impl Into<String>, scancode: u64) {
        self.keys.insert(action.into(), scancode);
    }

    ///
    /// The key that's bound to an action, if there is one
    ///
    pub fn key(&self, action: &str) -> Option<u64> {
        self.keys.get(action).copied()
    }

    ///
    /// The actions that have been bound, along with their keys
    ///
    pub fn bindings(&self) -> impl Iterator<Item=(&str, u64)> {
        self.keys.iter().map(|(action, scancode)| (action.as_str(), *scancode))
    }
}

impl Default for KeyMapping {
    ///
    /// The default key mapping uses Enter, Esc and the arrow keys
    ///
    fn default() -> KeyMapping {
        let mut keys = KeyMapping::empty();

        keys.set_key("Enter", 10);
        keys.set_key("Left", 37);
        keys.set_key("Right", 39);
        keys.set_key("Esc", 27);
        keys.set_key("Jump", 38);

        keys
    }
}

///
/// The state of the keyboard and mouse for a single frame
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct InputState {
    /// Scancodes of the keys that are currently held down
    keys_down:  SmallVec<[u64; 8]>,

    /// True if the mouse button is held down
    mouse_down: bool,
}

impl InputState {
    ///
    /// Creates an input state with no keys or buttons pressed
    ///
    pub fn new() -> InputState {
        InputState::default()
    }

    ///
    /// Marks a key as pressed
    ///
    pub fn key_down(&mut self, scancode: u64) {
        if !self.keys_down.contains(&scancode) {
            self.keys_down.push(scancode);
        }
    }

    ///
    /// Marks a key as released
    ///
    pub fn key_up(&mut self, scancode: u64) {
        self.keys_down.retain(|key| *key != scancode);
    }

    #[inline] pub fn set_mouse_down(&mut self, mouse_down: bool) { self.mouse_down = mouse_down; }
    #[inline] pub fn mouse_down(&self) -> bool { self.mouse_down }

    ///
    /// True if the key with the specified scancode is held down
    ///
    #[inline]
    pub fn is_key_down(&self, scancode: u64) -> bool {
        self.keys_down.contains(&scancode)
    }

    ///
    /// True if the key bound to an action is held down (false if the action has no key)
    ///
    pub fn is_action_down(&self, keys: &KeyMapping, action: &str) -> bool {
        keys.key(action)
            .map(|scancode| self.is_key_down(scancode))
            .unwrap_or(false)
    }

    /// The keys that are currently held down, in the order they were pressed
    #[inline] pub fn keys_down(&self) -> &[u64] { &self.keys_down }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = KeyMapping::default();

        assert!(keys.key("Enter") == Some(10));
        assert!(keys.key("Left") == Some(37));
        assert!(keys.key("Right") == Some(39));
        assert!(keys.key("Esc") == Some(27));
        assert!(keys.key("Jump") == Some(38));
        assert!(keys.key("Fire").is_none());
        assert!(keys.bindings().count() == 5);
    }

    #[test]
    fn rebind_action() {
        let mut keys = KeyMapping::default();
        keys.set_key("Jump", 32);

        assert!(keys.key("Jump") == Some(32));
    }

    #[test]
    fn press_and_release() {
        let keys        = KeyMapping::default();
        let mut input   = InputState::new();

        input.key_down(38);
        input.key_down(38);
        assert!(input.keys_down() == &[38]);
        assert!(input.is_action_down(&keys, "Jump"));
        assert!(!input.is_action_down(&keys, "Left"));
        assert!(!input.is_action_down(&keys, "Fire"));

        input.key_up(38);
        assert!(!input.is_key_down(38));
        assert!(!input.is_action_down(&keys, "Jump"));
    }
}
