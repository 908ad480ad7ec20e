//=========================================================================
// Object Registry
//=========================================================================
//
// Maps discriminator tags from scene documents to construction closures.
//
//   components:  class  → ComponentFactory   ("BoxCollider", ...)
//   ui elements: type   → UiElementFactory   ("Label", "Text", ...)
//
// Game objects are not registered; they are recognized by
// GAME_OBJECT_TYPE and built directly.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::game_object::{BoxCollider, Component};
use crate::core::ui::{Label, Text, UiElement, UiElementArgs};

//=== Factories ===========================================================

pub type ComponentFactory = Rc<dyn Fn() -> Box<dyn Component>>;

pub type UiElementFactory = Rc<dyn Fn(UiElementArgs) -> Box<dyn UiElement>>;

//=== ObjectRegistry ======================================================

/// Tag-to-factory lookup used when materializing scene documents.
///
/// Cloning is cheap and shares the factories.
#[derive(Clone)]
pub struct ObjectRegistry {
    components: HashMap<String, ComponentFactory>,
    ui_elements: HashMap<String, UiElementFactory>,
}

impl ObjectRegistry {
    /// Registry with no factories at all.
    pub fn empty() -> Self {
        Self {
            components: HashMap::new(),
            ui_elements: HashMap::new(),
        }
    }

    /// Registry with the built-in component and widgets.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_component(BoxCollider::TYPE_NAME, || {
            Box::new(BoxCollider::default())
        });
        registry.register_ui_element(Label::TYPE_NAME, |args| Box::new(Label::new(args)));
        registry.register_ui_element(Text::TYPE_NAME, |args| Box::new(Text::new(args)));
        registry
    }

    //--- Registration -----------------------------------------------------

    pub fn register_component<F>(&mut self, class: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Component> + 'static,
    {
        let class = class.into();
        debug!("Registering component class {}", class);
        if self.components.insert(class.clone(), Rc::new(factory)).is_some() {
            warn!("Component class {} was already registered and has been replaced", class);
        }
    }

    pub fn register_ui_element<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn(UiElementArgs) -> Box<dyn UiElement> + 'static,
    {
        let kind = kind.into();
        debug!("Registering UI element type {}", kind);
        if self.ui_elements.insert(kind.clone(), Rc::new(factory)).is_some() {
            warn!("UI element type {} was already registered and has been replaced", kind);
        }
    }

    //--- Lookup -----------------------------------------------------------

    pub fn has_component(&self, class: &str) -> bool {
        self.components.contains_key(class)
    }

    pub fn is_ui_type(&self, kind: &str) -> bool {
        self.ui_elements.contains_key(kind)
    }

    //--- Construction -----------------------------------------------------

    pub fn create_component(&self, class: &str) -> Result<Box<dyn Component>, SceneError> {
        self.components
            .get(class)
            .map(|factory| factory())
            .ok_or_else(|| SceneError::UnknownComponent(class.to_string()))
    }

    pub fn create_ui_element(
        &self,
        kind: &str,
        args: UiElementArgs,
    ) -> Result<Box<dyn UiElement>, SceneError> {
        self.ui_elements
            .get(kind)
            .map(|factory| factory(args))
            .ok_or_else(|| SceneError::UnsupportedItemType(kind.to_string()))
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components: Vec<_> = self.components.keys().collect();
        let mut ui_elements: Vec<_> = self.ui_elements.keys().collect();
        components.sort();
        ui_elements.sort();

        f.debug_struct("ObjectRegistry")
            .field("components", &components)
            .field("ui_elements", &ui_elements)
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================
