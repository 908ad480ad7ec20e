//=========================================================================
// Scene Metadata
//=========================================================================
//
// Typed records mirroring a declarative scene document.
//
// A document is decoded into a generic `serde_json::Value` first, then
// validated into these records up front, so that hierarchy building never
// probes optional fields itself. Records are transient: they are consumed
// once to materialize game objects and UI elements.
//
// Document shape:
//
//   {
//     "name": "Level 1",
//     "environmentTileMapPath": "maps/level1",
//     "hierarchy": [
//       { "type": "GameObject", "name": "Player", "position": {"x":1,"y":2},
//         "sprite": { "texture": { "path": "textures/player" } },
//         "components": [ { "class": "BoxCollider", "properties": {} } ] },
//       { "type": "Label", "name": "Score", "text": "0" }
//     ]
//   }
//
//=========================================================================

//=== Module Declarations =================================================

mod objects;
mod scene;

//=== Public API ==========================================================

pub use objects::{
    ComponentMetadata, GameObjectMetadata, SpriteMetadata, TextureMetadata, UiElementMetadata,
};
pub use scene::{SceneMetadata, SceneObjectMetadata};

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::math::Vector2;

//=== Constants ===========================================================

/// Hierarchy item discriminator for game objects.
pub const GAME_OBJECT_TYPE: &str = "GameObject";

//=== Vector2Metadata =====================================================

/// Integer `{x, y}` pair; absent keys default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector2Metadata {
    pub x: i32,
    pub y: i32,
}

impl Vector2Metadata {
    pub const ZERO: Self = Self { x: 0, y: 0 };
    pub const ONE: Self = Self { x: 1, y: 1 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn from_value(value: &Value) -> Result<Self, SceneError> {
        Self::deserialize(value)
            .map_err(|e| SceneError::management(format!("Invalid vector {}: {}", value, e)))
    }

    pub fn to_value(&self) -> Value {
        json!({ "x": self.x, "y": self.y })
    }
}

impl From<Vector2Metadata> for Vector2 {
    fn from(metadata: Vector2Metadata) -> Self {
        Vector2::new(metadata.x, metadata.y)
    }
}

impl From<Vector2> for Vector2Metadata {
    fn from(vector: Vector2) -> Self {
        Self::new(vector.x, vector.y)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_round_trips_through_document_shape() {
        let value = json!({ "x": 3, "y": 4 });
        let vector = Vector2Metadata::from_value(&value).unwrap();

        assert_eq!(vector, Vector2Metadata::new(3, 4));
        assert_eq!(vector.to_value(), value);
    }

    #[test]
    fn vector_missing_keys_default_to_zero() {
        assert_eq!(
            Vector2Metadata::from_value(&json!({ "y": 7 })).unwrap(),
            Vector2Metadata::new(0, 7)
        );
        assert_eq!(
            Vector2Metadata::from_value(&json!({})).unwrap(),
            Vector2Metadata::ZERO
        );
    }

    #[test]
    fn vector_rejects_non_integer_coordinates() {
        let err = Vector2Metadata::from_value(&json!({ "x": "left" })).unwrap_err();
        assert!(matches!(err, SceneError::Management(_)));
    }

    #[test]
    fn converts_to_engine_vector() {
        let vector: Vector2 = Vector2Metadata::new(-2, 5).into();
        assert_eq!(vector, Vector2::new(-2, 5));
    }
}
