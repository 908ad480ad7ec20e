//=========================================================================
// Game Objects
//=========================================================================
//
// Named, tagged entities placed in a scene, optionally drawn with a sprite
// and extended with components.
//
// Architecture:
//   GameObject
//     ├─ transform: position / rotation / scale
//     ├─ sprite: Option<Sprite>
//     └─ components: Vec<Box<dyn Component>>
//
//=========================================================================

//=== Module Declarations =================================================

mod component;
mod sprite;

//=== Public API ==========================================================

pub use component::{BoxCollider, Component, ComponentCapabilities, PropertyError};
pub use sprite::{Sprite, Texture};

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::math::{Rect, Vector2};
use crate::core::physics::Collider;

//=== GameObject ==========================================================

/// Entity living in a scene's root collection.
pub struct GameObject {
    name: String,
    tag: String,
    position: Vector2,
    rotation: Vector2,
    scale: Vector2,
    sprite: Option<Sprite>,
    components: Vec<Box<dyn Component>>,
    active: bool,
}

impl GameObject {
    //--- Construction -----------------------------------------------------

    pub fn new(
        name: impl Into<String>,
        tag: impl Into<String>,
        position: Vector2,
        rotation: Vector2,
        scale: Vector2,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            position,
            rotation,
            scale,
            sprite: None,
            components: Vec::new(),
            active: true,
        }
    }

    /// Untagged object at the origin with unit scale.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "", Vector2::ZERO, Vector2::ZERO, Vector2::ONE)
    }

    //--- Accessors --------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn rotation(&self) -> Vector2 {
        self.rotation
    }

    pub fn scale(&self) -> Vector2 {
        self.scale
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    //--- Sprite -----------------------------------------------------------

    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    pub fn set_sprite(&mut self, sprite: Sprite) {
        self.sprite = Some(sprite);
    }

    /// Attaches a sprite cut from `texture` at `position` with `size`.
    pub fn set_sprite_from_texture(&mut self, texture: Texture, position: Vector2, size: Vector2) {
        self.sprite = Some(Sprite::new(texture, Rect::new(position, size)));
    }

    //--- Components -------------------------------------------------------

    /// Attaches a component.
    ///
    /// A component that declares the collider capability must actually
    /// provide one; otherwise it is rejected here, at construction time,
    /// rather than when the scene registers colliders with physics.
    pub fn add_component(&mut self, component: Box<dyn Component>) -> Result<(), SceneError> {
        if component.capabilities().contains(ComponentCapabilities::COLLIDER)
            && component.as_collider(&self.name).is_none()
        {
            return Err(SceneError::IncorrectComponentType {
                expected: "Collider",
                found: component.type_name().to_string(),
            });
        }

        self.components.push(component);
        Ok(())
    }

    /// Returns the first component of type `T`.
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|c| c.as_any().downcast_ref::<T>())
    }

    /// Mutable variant of [`get_component`](Self::get_component).
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| c.as_any_mut().downcast_mut::<T>())
    }

    pub fn components(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|c| c.as_ref())
    }

    /// Collider provided by the first collider-capable component.
    pub fn collider(&self) -> Option<Collider> {
        self.components
            .iter()
            .find_map(|c| c.as_collider(&self.name))
    }

    //--- Lifecycle --------------------------------------------------------

    pub fn start(&mut self) {
        for component in &mut self.components {
            component.start();
        }
    }

    pub fn stop(&mut self) {
        for component in &mut self.components {
            component.stop();
        }
    }

    pub fn update(&mut self) {
        if !self.active {
            return;
        }
        for component in &mut self.components {
            component.update();
        }
    }

    pub fn fixed_update(&mut self) {
        if !self.active {
            return;
        }
        for component in &mut self.components {
            component.fixed_update();
        }
    }

    pub fn render(&self) {
        if !self.active {
            return;
        }
        for component in &self.components {
            component.render();
        }
    }

    pub fn erase(&self) {
        for component in &self.components {
            component.erase();
        }
    }
}

impl std::fmt::Debug for GameObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let components: Vec<_> = self.components.iter().map(|c| c.type_name()).collect();

        f.debug_struct("GameObject")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("position", &self.position)
            .field("rotation", &self.rotation)
            .field("scale", &self.scale)
            .field("sprite", &self.sprite.as_ref().map(|s| s.texture().path().to_path_buf()))
            .field("components", &components)
            .field("active", &self.active)
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    /// Claims the collider capability but never provides one.
    struct BrokenCollider;

    impl Component for BrokenCollider {
        fn type_name(&self) -> &'static str {
            "BrokenCollider"
        }

        fn capabilities(&self) -> ComponentCapabilities {
            ComponentCapabilities::COLLIDER
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[derive(Default)]
    struct Counter {
        updates: u32,
    }

    impl Component for Counter {
        fn type_name(&self) -> &'static str {
            "Counter"
        }

        fn update(&mut self) {
            self.updates += 1;
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn declared_but_missing_collider_is_rejected() {
        let mut object = GameObject::named("Wall");
        let err = object.add_component(Box::new(BrokenCollider)).unwrap_err();

        assert!(matches!(
            err,
            SceneError::IncorrectComponentType { expected: "Collider", ref found } if found == "BrokenCollider"
        ));
        assert_eq!(object.components().count(), 0);
    }

    #[test]
    fn collider_comes_from_capable_component() {
        let mut object = GameObject::named("Player");
        assert!(object.collider().is_none());

        object.add_component(Box::new(Counter::default())).unwrap();
        object.add_component(Box::new(BoxCollider::new(Vector2::new(1, 5)))).unwrap();

        let collider = object.collider().unwrap();
        assert_eq!(collider.owner, "Player");
        assert_eq!(collider.size, Vector2::new(1, 5));
    }

    #[test]
    fn get_component_downcasts_by_type() {
        let mut object = GameObject::named("Player");
        object.add_component(Box::new(Counter::default())).unwrap();

        object.update();
        object.update();
        assert_eq!(object.get_component::<Counter>().unwrap().updates, 2);
        assert!(object.get_component::<BoxCollider>().is_none());

        object.get_component_mut::<Counter>().unwrap().updates = 0;
        assert_eq!(object.get_component::<Counter>().unwrap().updates, 0);
    }

    #[test]
    fn inactive_objects_skip_updates() {
        let mut object = GameObject::named("Ghost");
        object.add_component(Box::new(Counter::default())).unwrap();
        object.set_active(false);

        object.update();
        assert_eq!(object.get_component::<Counter>().unwrap().updates, 0);
    }

    #[test]
    fn sprite_from_texture_uses_given_rect() {
        let mut object = GameObject::named("Player");
        object.set_sprite_from_texture(
            Texture::new("Textures/player"),
            Vector2::new(0, 0),
            Vector2::new(1, 5),
        );

        let sprite = object.sprite().unwrap();
        assert_eq!(sprite.rect(), Rect::new(Vector2::ZERO, Vector2::new(1, 5)));
    }
}
