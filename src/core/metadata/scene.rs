//=========================================================================
// Scene Document Metadata
//=========================================================================
//
// Top-level scene record and the hierarchy item dispatch.
//
// Hierarchy rules:
//   - item without `type`      → warn! and skip (index is kept)
//   - `type == "GameObject"`   → GameObjectMetadata
//   - any other string `type`  → UiElementMetadata; whether the type can
//                                be built is decided by the ObjectRegistry
//   - anything malformed       → Management error, first one wins
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{json, Value};

//=== Internal Dependencies ===============================================

use super::{GameObjectMetadata, UiElementMetadata, GAME_OBJECT_TYPE};
use crate::core::config::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use crate::core::error::SceneError;

//=== SceneObjectMetadata =================================================

/// One validated hierarchy item.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObjectMetadata {
    GameObject(GameObjectMetadata),
    UiElement(UiElementMetadata),
}

impl SceneObjectMetadata {
    pub fn index(&self) -> usize {
        match self {
            Self::GameObject(meta) => meta.index,
            Self::UiElement(meta) => meta.index,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::GameObject(_) => GAME_OBJECT_TYPE,
            Self::UiElement(meta) => &meta.kind,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::GameObject(meta) => meta.to_value(),
            Self::UiElement(meta) => meta.to_value(),
        }
    }

    /// Parses one hierarchy item. `Ok(None)` means the item was skipped.
    fn from_item(index: usize, item: &Value) -> Result<Option<Self>, SceneError> {
        let kind = match item.get("type") {
            None | Some(Value::Null) => {
                warn!("Hierarchy item {} has no type, skipping", index);
                return Ok(None);
            }
            Some(Value::String(kind)) => kind.as_str(),
            Some(other) => {
                return Err(SceneError::management(format!(
                    "Invalid type for hierarchy item {}: {}",
                    index, other
                )))
            }
        };

        let object = if kind == GAME_OBJECT_TYPE {
            Self::GameObject(GameObjectMetadata::from_value(index, item)?)
        } else {
            Self::UiElement(UiElementMetadata::from_value(index, kind, item)?)
        };
        Ok(Some(object))
    }
}

//=== SceneMetadata =======================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScene {
    name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    environment_tile_map_path: Option<String>,
    hierarchy: Option<Vec<Value>>,
}

/// A validated scene document.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMetadata {
    pub name: Option<String>,
    pub width: u32,
    pub height: u32,
    pub environment_tile_map_path: Option<String>,
    pub hierarchy: Vec<SceneObjectMetadata>,
}

impl Default for SceneMetadata {
    fn default() -> Self {
        Self {
            name: None,
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
            environment_tile_map_path: None,
            hierarchy: Vec::new(),
        }
    }
}

impl SceneMetadata {
    pub fn from_value(document: &Value) -> Result<Self, SceneError> {
        let raw = RawScene::deserialize(document)
            .map_err(|e| SceneError::management(format!("Invalid scene document: {}", e)))?;

        let mut hierarchy = Vec::new();
        for (index, item) in raw.hierarchy.unwrap_or_default().iter().enumerate() {
            if let Some(object) = SceneObjectMetadata::from_item(index, item)? {
                hierarchy.push(object);
            }
        }
        debug!("Parsed {} hierarchy items", hierarchy.len());

        Ok(Self {
            name: raw.name,
            width: raw.width.unwrap_or(DEFAULT_SCREEN_WIDTH),
            height: raw.height.unwrap_or(DEFAULT_SCREEN_HEIGHT),
            environment_tile_map_path: raw.environment_tile_map_path,
            hierarchy,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        let document: Value = serde_json::from_str(text)
            .map_err(|e| SceneError::management(format!("Invalid scene document: {}", e)))?;
        Self::from_value(&document)
    }

    pub fn to_value(&self) -> Value {
        let mut document = json!({
            "width": self.width,
            "height": self.height,
            "hierarchy": self
                .hierarchy
                .iter()
                .map(SceneObjectMetadata::to_value)
                .collect::<Vec<_>>(),
        });

        if let Some(fields) = document.as_object_mut() {
            if let Some(name) = &self.name {
                fields.insert("name".to_string(), Value::String(name.clone()));
            }
            if let Some(path) = &self.environment_tile_map_path {
                fields.insert("environmentTileMapPath".to_string(), Value::String(path.clone()));
            }
        }
        document
    }
}

//=========================================================================
// Tests
//=========================================================================
