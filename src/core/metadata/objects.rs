//=========================================================================
// Hierarchy Item Metadata
//=========================================================================
//
// Game object, sprite, texture, component, and UI element records.
//
// Items are deserialized through permissive `Raw*` shapes first (every
// field optional) and then validated into the public records, which carry
// no optional-presence checks except where absence is meaningful
// (`sprite`, `text`).
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;
use serde_json::{json, Map, Value};

//=== Internal Dependencies ===============================================

use super::{Vector2Metadata, GAME_OBJECT_TYPE};
use crate::core::error::SceneError;

//=== Raw Shapes ==========================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    name: Option<String>,
    tag: Option<String>,
    position: Option<Vector2Metadata>,
    rotation: Option<Vector2Metadata>,
    scale: Option<Vector2Metadata>,
    size: Option<Vector2Metadata>,
    sprite: Option<RawSprite>,
    components: Option<Vec<ComponentMetadata>>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSprite {
    texture: Option<RawTexture>,
}

#[derive(Debug, Deserialize)]
struct RawTexture {
    path: Option<String>,
    position: Option<Vector2Metadata>,
    size: Option<Vector2Metadata>,
}

fn parse_raw_item(index: usize, item: &Value) -> Result<RawItem, SceneError> {
    RawItem::deserialize(item)
        .map_err(|e| SceneError::management(format!("Invalid hierarchy item {}: {}", index, e)))
}

/// Display name given to materialized objects.
///
/// An absent name still yields `" - <index>"`.
pub(crate) fn display_name(name: &str, index: usize) -> String {
    format!("{} - {}", name, index)
}

//=== TextureMetadata =====================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureMetadata {
    /// Non-empty texture path.
    pub path: String,
    pub position: Vector2Metadata,
    pub size: Vector2Metadata,
}

impl TextureMetadata {
    fn from_raw(raw: RawTexture) -> Result<Self, SceneError> {
        let path = raw
            .path
            .filter(|path| !path.is_empty())
            .ok_or_else(|| SceneError::management("Invalid sprite texture path"))?;

        Ok(Self {
            path,
            position: raw.position.unwrap_or_default(),
            size: raw.size.unwrap_or_default(),
        })
    }

    pub fn to_value(&self) -> Value {
        json!({
            "path": self.path,
            "position": self.position.to_value(),
            "size": self.size.to_value(),
        })
    }
}

//=== SpriteMetadata ======================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteMetadata {
    pub texture: TextureMetadata,
}

impl SpriteMetadata {
    fn from_raw(raw: RawSprite, owner: &str) -> Result<Self, SceneError> {
        let texture = raw.texture.ok_or_else(|| {
            SceneError::management(format!(
                "Sprite texture not defined for game object: {}",
                owner
            ))
        })?;

        Ok(Self {
            texture: TextureMetadata::from_raw(texture)?,
        })
    }

    pub fn to_value(&self) -> Value {
        json!({ "texture": self.texture.to_value() })
    }
}

//=== ComponentMetadata ===================================================

/// Component class identifier plus free-form properties.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentMetadata {
    pub class: String,

    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl ComponentMetadata {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "class": self.class,
            "properties": Value::Object(self.properties.clone()),
        })
    }
}

//=== GameObjectMetadata ==================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GameObjectMetadata {
    /// Position of the item in the document hierarchy.
    pub index: usize,
    pub name: String,
    pub tag: String,
    pub position: Vector2Metadata,
    pub rotation: Vector2Metadata,
    pub scale: Vector2Metadata,
    pub size: Vector2Metadata,
    pub sprite: Option<SpriteMetadata>,
    pub components: Vec<ComponentMetadata>,
}

impl GameObjectMetadata {
    /// Validates a hierarchy item already known to be a game object.
    pub fn from_value(index: usize, item: &Value) -> Result<Self, SceneError> {
        let raw = parse_raw_item(index, item)?;
        let name = raw.name.unwrap_or_default();

        let sprite = match raw.sprite {
            Some(sprite) => Some(SpriteMetadata::from_raw(
                sprite,
                &display_name(&name, index),
            )?),
            None => None,
        };

        Ok(Self {
            index,
            tag: raw.tag.unwrap_or_default(),
            position: raw.position.unwrap_or_default(),
            rotation: raw.rotation.unwrap_or_default(),
            scale: raw.scale.unwrap_or(Vector2Metadata::ONE),
            size: raw.size.unwrap_or_default(),
            sprite,
            components: raw.components.unwrap_or_default(),
            name,
        })
    }

    pub fn display_name(&self) -> String {
        display_name(&self.name, self.index)
    }

    pub fn to_value(&self) -> Value {
        let mut item = json!({
            "type": GAME_OBJECT_TYPE,
            "name": self.name,
            "tag": self.tag,
            "position": self.position.to_value(),
            "rotation": self.rotation.to_value(),
            "scale": self.scale.to_value(),
            "size": self.size.to_value(),
            "components": self
                .components
                .iter()
                .map(ComponentMetadata::to_value)
                .collect::<Vec<_>>(),
        });

        if let (Some(sprite), Some(fields)) = (&self.sprite, item.as_object_mut()) {
            fields.insert("sprite".to_string(), sprite.to_value());
        }
        item
    }
}

//=== UiElementMetadata ===================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiElementMetadata {
    pub index: usize,
    /// Widget type discriminator, e.g. `Label`.
    pub kind: String,
    pub name: String,
    pub tag: String,
    pub position: Vector2Metadata,
    pub size: Vector2Metadata,
    pub text: Option<String>,
}

impl UiElementMetadata {
    pub fn from_value(index: usize, kind: &str, item: &Value) -> Result<Self, SceneError> {
        let raw = parse_raw_item(index, item)?;

        Ok(Self {
            index,
            kind: kind.to_string(),
            name: raw.name.unwrap_or_default(),
            tag: raw.tag.unwrap_or_default(),
            position: raw.position.unwrap_or_default(),
            size: raw.size.unwrap_or_default(),
            text: raw.text,
        })
    }

    pub fn display_name(&self) -> String {
        display_name(&self.name, self.index)
    }

    pub fn to_value(&self) -> Value {
        let mut item = json!({
            "type": self.kind,
            "name": self.name,
            "tag": self.tag,
            "position": self.position.to_value(),
            "size": self.size.to_value(),
        });

        if let (Some(text), Some(fields)) = (&self.text, item.as_object_mut()) {
            fields.insert("text".to_string(), Value::String(text.clone()));
        }
        item
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_object_defaults() {
        let item = json!({ "type": "GameObject", "name": "Rock" });
        let meta = GameObjectMetadata::from_value(3, &item).unwrap();

        assert_eq!(meta.display_name(), "Rock - 3");
        assert_eq!(meta.tag, "");
        assert_eq!(meta.position, Vector2Metadata::ZERO);
        assert_eq!(meta.rotation, Vector2Metadata::ZERO);
        assert_eq!(meta.scale, Vector2Metadata::ONE);
        assert_eq!(meta.size, Vector2Metadata::ZERO);
        assert!(meta.sprite.is_none());
        assert!(meta.components.is_empty());
    }

    #[test]
    fn missing_name_keeps_separator() {
        let meta = GameObjectMetadata::from_value(0, &json!({ "type": "GameObject" })).unwrap();
        assert_eq!(meta.display_name(), " - 0");
    }

    #[test]
    fn sprite_without_texture_is_rejected() {
        let item = json!({ "name": "Player", "sprite": {} });
        let err = GameObjectMetadata::from_value(1, &item).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Scene management error: Sprite texture not defined for game object: Player - 1"
        );
    }

    #[test]
    fn texture_path_is_required_and_non_empty() {
        for texture in [json!({}), json!({ "path": "" })] {
            let item = json!({ "name": "Player", "sprite": { "texture": texture } });
            let err = GameObjectMetadata::from_value(0, &item).unwrap_err();
            assert!(err.to_string().ends_with("Invalid sprite texture path"));
        }
    }

    #[test]
    fn texture_bounds_default_to_zero() {
        let item = json!({ "sprite": { "texture": { "path": "textures/ship" } } });
        let meta = GameObjectMetadata::from_value(0, &item).unwrap();
        let texture = meta.sprite.unwrap().texture;

        assert_eq!(texture.path, "textures/ship");
        assert_eq!(texture.position, Vector2Metadata::ZERO);
        assert_eq!(texture.size, Vector2Metadata::ZERO);
    }

    #[test]
    fn components_keep_free_form_properties() {
        let item = json!({
            "components": [
                { "class": "BoxCollider", "properties": { "size": { "x": 2, "y": 1 } } },
                { "class": "Marker" }
            ]
        });
        let meta = GameObjectMetadata::from_value(0, &item).unwrap();

        assert_eq!(meta.components.len(), 2);
        assert_eq!(meta.components[0].properties["size"], json!({ "x": 2, "y": 1 }));
        assert!(meta.components[1].properties.is_empty());
    }

    #[test]
    fn component_without_class_is_malformed() {
        let item = json!({ "components": [ { "properties": {} } ] });
        let err = GameObjectMetadata::from_value(0, &item).unwrap_err();
        assert!(matches!(err, SceneError::Management(_)));
    }

    #[test]
    fn ui_element_keeps_optional_text() {
        let item = json!({ "type": "Label", "name": "Score", "text": "0", "size": { "x": 10, "y": 1 } });
        let meta = UiElementMetadata::from_value(2, "Label", &item).unwrap();

        assert_eq!(meta.kind, "Label");
        assert_eq!(meta.text.as_deref(), Some("0"));
        assert_eq!(meta.size, Vector2Metadata::new(10, 1));
        assert_eq!(meta.to_value()["text"], json!("0"));
    }

    #[test]
    fn game_object_serializes_back_to_document_shape() {
        let meta = GameObjectMetadata::from_value(
            0,
            &json!({
                "name": "Ship",
                "position": { "x": 4, "y": 2 },
                "sprite": { "texture": { "path": "ship", "size": { "x": 3, "y": 1 } } }
            }),
        )
        .unwrap();
        let value = meta.to_value();

        assert_eq!(value["type"], json!("GameObject"));
        assert_eq!(value["position"], json!({ "x": 4, "y": 2 }));
        assert_eq!(value["scale"], json!({ "x": 1, "y": 1 }));
        assert_eq!(value["sprite"]["texture"]["size"], json!({ "x": 3, "y": 1 }));
    }
}
