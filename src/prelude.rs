//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_console::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game facade
pub use crate::engine::{Game, GameBuilder, TickControl};

// Configuration and errors
pub use crate::core::config::GameConfig;
pub use crate::core::error::{SceneError, SceneId};
pub use crate::core::settings::{Settings, SettingsKey};

// Scenes
pub use crate::core::scene::{
    scene_ref, BasicScene, MetadataScene, ObjectRegistry, Scene, SceneBase, SceneManager,
    SceneObject, SceneRef,
};

// Game states
pub use crate::core::states::{GameState, GameStateContext, StateBindings, StateRequest};

// Scene contents
pub use crate::core::game_object::{BoxCollider, Component, GameObject, Sprite, Texture};
pub use crate::core::math::{Rect, Vector2};
pub use crate::core::ui::{Label, Text, UiElement};

// Input and events
pub use crate::core::events::{EventManager, SceneEvent, SceneEventType};
pub use crate::core::input::{InputEvent, KeyCode, Modifiers};
