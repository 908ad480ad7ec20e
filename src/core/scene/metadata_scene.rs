//=========================================================================
// Metadata Scene
//=========================================================================
//
// Scene built from a validated scene document.
//
// Nothing is materialized at construction; `awake` walks the hierarchy
// and builds every item through the ObjectRegistry snapshot taken when
// the document was loaded. The first failure aborts the walk and leaves
// the objects built so far in place.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{ObjectRegistry, Scene, SceneBase};
use crate::core::error::SceneError;
use crate::core::game_object::{Component, GameObject, PropertyError, Texture};
use crate::core::metadata::{
    ComponentMetadata, GameObjectMetadata, SceneMetadata, SceneObjectMetadata, TextureMetadata,
    UiElementMetadata,
};
use crate::core::ui::{UiElement, UiElementArgs};

//=== MetadataScene =======================================================

#[derive(Debug)]
pub struct MetadataScene {
    base: SceneBase,
    metadata: SceneMetadata,
    registry: ObjectRegistry,
    asset_root: Option<PathBuf>,
}

impl MetadataScene {
    pub fn new(name: impl Into<String>, metadata: SceneMetadata, registry: ObjectRegistry) -> Self {
        Self {
            base: SceneBase::new(name),
            metadata,
            registry,
            asset_root: None,
        }
    }

    /// Directory that relative texture paths are resolved against.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    pub fn metadata(&self) -> &SceneMetadata {
        &self.metadata
    }

    //--- Materialization --------------------------------------------------

    fn build_game_object(&self, meta: &GameObjectMetadata) -> Result<GameObject, SceneError> {
        let mut object = GameObject::new(
            meta.display_name(),
            meta.tag.clone(),
            meta.position.into(),
            meta.rotation.into(),
            meta.scale.into(),
        );

        if let Some(sprite) = &meta.sprite {
            let texture = self.load_texture(&sprite.texture)?;
            object.set_sprite_from_texture(
                texture,
                sprite.texture.position.into(),
                sprite.texture.size.into(),
            );
        }

        for component_meta in &meta.components {
            let component = self.build_component(object.name(), component_meta)?;
            object.add_component(component)?;
        }

        Ok(object)
    }

    fn build_component(
        &self,
        owner: &str,
        meta: &ComponentMetadata,
    ) -> Result<Box<dyn Component>, SceneError> {
        let mut component = self.registry.create_component(&meta.class)?;

        for (property, value) in &meta.properties {
            match component.set_property(property, value) {
                Ok(()) => {}
                Err(PropertyError::Unknown(_)) => warn!(
                    "Property {} does not exist on component {} of {}, skipping",
                    property, meta.class, owner
                ),
                Err(err @ PropertyError::InvalidValue { .. }) => warn!(
                    "Skipping property on component {} of {}: {}",
                    meta.class, owner, err
                ),
            }
        }

        Ok(component)
    }

    fn build_ui_element(&self, meta: &UiElementMetadata) -> Result<Box<dyn UiElement>, SceneError> {
        let args = UiElementArgs {
            scene: self.base.name().to_string(),
            name: meta.display_name(),
            position: meta.position.into(),
            size: meta.size.into(),
        };
        let mut element = self.registry.create_ui_element(&meta.kind, args)?;

        if let Some(text) = &meta.text {
            let name = element.name().to_string();
            element
                .as_text_mut()
                .ok_or(SceneError::UnsupportedText(name))?
                .set_text(text);
        }

        Ok(element)
    }

    /// Reads the texture file when it exists; a missing file yields an
    /// empty texture that still records its path.
    fn load_texture(&self, meta: &TextureMetadata) -> Result<Texture, SceneError> {
        let path = self.resolve(Path::new(&meta.path));

        match Texture::load(&path) {
            Ok(texture) => Ok(texture),
            Err(SceneError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!("Texture file {} not found, using an empty texture", path.display());
                Ok(Texture::new(path))
            }
            Err(err) => Err(err),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.asset_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Scene for MetadataScene {
    fn base(&self) -> &SceneBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }

    fn awake(&mut self) -> Result<(), SceneError> {
        if let Some(path) = self.metadata.environment_tile_map_path.clone() {
            debug!("Setting environment tile map path to: {}", path);
            self.base.set_environment_tile_map_path(path);
        }

        info!(
            "Building scene hierarchy for {} ({} item(s))",
            self.base.name(),
            self.metadata.hierarchy.len()
        );

        for item in &self.metadata.hierarchy {
            match item {
                SceneObjectMetadata::GameObject(meta) => {
                    let object = self.build_game_object(meta)?;
                    self.base.add(object);
                }
                SceneObjectMetadata::UiElement(meta) => {
                    let element = self.build_ui_element(meta)?;
                    self.base.add(element);
                }
            }
        }

        Ok(())
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_object::BoxCollider;
    use crate::core::math::Vector2;
    use crate::core::ui::{TextContent, UiElementArgs};
    use serde_json::json;
    use std::any::Any;

    fn scene_from(document: serde_json::Value, registry: ObjectRegistry) -> MetadataScene {
        let metadata = SceneMetadata::from_value(&document).unwrap();
        MetadataScene::new("Level", metadata, registry)
    }

    #[test]
    fn awake_builds_game_objects_and_widgets() {
        let mut scene = scene_from(
            json!({
                "environmentTileMapPath": "maps/level",
                "hierarchy": [
                    {
                        "type": "GameObject",
                        "name": "Player",
                        "tag": "player",
                        "position": { "x": 4, "y": 5 },
                        "components": [
                            {
                                "class": "BoxCollider",
                                "properties": {
                                    "size": { "x": 3, "y": 2 },
                                    "bounciness": 4
                                }
                            }
                        ]
                    },
                    { "type": "Label", "name": "Score", "text": "0" }
                ]
            }),
            ObjectRegistry::new(),
        );

        assert!(scene.root_game_objects().is_empty());
        scene.awake().unwrap();

        let player = &scene.root_game_objects()[0];
        assert_eq!(player.name(), "Player - 0");
        assert_eq!(player.tag(), "player");
        assert_eq!(player.position(), Vector2::new(4, 5));
        assert_eq!(player.scale(), Vector2::ONE);
        assert_eq!(
            player.get_component::<BoxCollider>().unwrap().size,
            Vector2::new(3, 2)
        );

        let score = scene.base().find_ui_element("Score - 1").unwrap();
        assert_eq!(score.as_text().unwrap().text(), "0");
        assert_eq!(scene.base().environment_tile_map_path(), Some("maps/level"));
    }

    #[test]
    fn unknown_component_class_fails() {
        let mut scene = scene_from(
            json!({ "hierarchy": [
                { "type": "GameObject", "name": "A", "components": [ { "class": "Rigidbody" } ] }
            ]}),
            ObjectRegistry::new(),
        );

        assert!(matches!(
            scene.awake(),
            Err(SceneError::UnknownComponent(class)) if class == "Rigidbody"
        ));
    }

    #[test]
    fn text_on_widget_without_text_content_fails() {
        struct Frame {
            name: String,
        }

        impl UiElement for Frame {
            fn type_name(&self) -> &'static str {
                "Frame"
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn position(&self) -> Vector2 {
                Vector2::ZERO
            }

            fn set_position(&mut self, _position: Vector2) {}

            fn size(&self) -> Vector2 {
                Vector2::ZERO
            }
        }

        let mut registry = ObjectRegistry::new();
        registry.register_ui_element("Frame", |args: UiElementArgs| {
            Box::new(Frame { name: args.name })
        });

        let mut scene = scene_from(
            json!({ "hierarchy": [
                { "type": "GameObject", "name": "Kept" },
                { "type": "Frame", "name": "Border", "text": "nope" }
            ]}),
            registry,
        );

        assert!(matches!(
            scene.awake(),
            Err(SceneError::UnsupportedText(name)) if name == "Border - 1"
        ));
        assert_eq!(scene.root_game_objects().len(), 1);
    }

    #[test]
    fn declared_collider_that_cannot_collide_is_rejected() {
        use crate::core::game_object::ComponentCapabilities;
        use crate::core::physics::Collider;

        struct Hollow;

        impl Component for Hollow {
            fn type_name(&self) -> &'static str {
                "Hollow"
            }

            fn capabilities(&self) -> ComponentCapabilities {
                ComponentCapabilities::COLLIDER
            }

            fn as_collider(&self, _owner: &str) -> Option<Collider> {
                None
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }
        }

        let mut registry = ObjectRegistry::new();
        registry.register_component("Hollow", || Box::new(Hollow));

        let mut scene = scene_from(
            json!({ "hierarchy": [
                { "type": "GameObject", "components": [ { "class": "Hollow" } ] }
            ]}),
            registry,
        );

        assert!(matches!(
            scene.awake(),
            Err(SceneError::IncorrectComponentType { expected: "Collider", .. })
        ));
    }

    #[test]
    fn textures_are_read_relative_to_asset_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ship.texture"), "<^>\n/ \\").unwrap();

        let metadata = SceneMetadata::from_value(&json!({ "hierarchy": [
            {
                "type": "GameObject",
                "name": "Ship",
                "sprite": { "texture": { "path": "ship.texture", "size": { "x": 3, "y": 2 } } }
            },
            {
                "type": "GameObject",
                "name": "Ghost",
                "sprite": { "texture": { "path": "missing.texture" } }
            }
        ]}))
        .unwrap();
        let mut scene =
            MetadataScene::new("Space", metadata, ObjectRegistry::new()).with_asset_root(dir.path());

        scene.awake().unwrap();

        let ship = scene.root_game_objects()[0].sprite().unwrap();
        assert_eq!(ship.texture().pixel(1, 0), Some('^'));
        assert_eq!(ship.rows(), ["<^>", "/ \\"]);

        let ghost = scene.root_game_objects()[1].sprite().unwrap();
        assert_eq!(ghost.texture().height(), 0);
        assert_eq!(ghost.texture().path(), dir.path().join("missing.texture"));
    }
}
