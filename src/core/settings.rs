//=========================================================================
// Settings
//=========================================================================
//
// Free-form game settings shared between the game, the scene manager and
// every loaded scene.
//
// Settings are copied by value: a scene receives its own snapshot when it
// is loaded, so later changes to the manager's settings never leak into a
// scene that is already running.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;

//=== SettingsKey =========================================================

/// Well-known settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    /// Key that toggles the paused state.
    PauseKey,
    GameName,
    ScreenWidth,
    ScreenHeight,
    Fps,
}

impl SettingsKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PauseKey => "pause_key",
            Self::GameName => "game_name",
            Self::ScreenWidth => "screen_width",
            Self::ScreenHeight => "screen_height",
            Self::Fps => "fps",
        }
    }
}

//=== Settings ============================================================

/// Ordered key/value settings map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, Value>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Inserts a value, returning the previous one if present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Copies every entry of `other` over this map.
    pub fn merge(&mut self, other: &Settings) {
        for (key, value) in other.iter() {
            self.values.insert(key.clone(), value.clone());
        }
    }

    //--- Typed Accessors --------------------------------------------------

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Reads a key code stored as its variant name (e.g. `"Escape"`).
    pub fn key_code(&self, key: &str) -> Option<KeyCode> {
        self.get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

impl FromIterator<(String, Value)> for Settings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
