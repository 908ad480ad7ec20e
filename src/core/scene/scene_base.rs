//=========================================================================
// Scene Base
//=========================================================================
//
// State shared by every scene: name, root collections, frozen settings,
// and lifecycle flags. Default `Scene` hooks fan out to the objects held
// here.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use serde_json::Value;

//=== Internal Dependencies ===============================================

use super::{Scene, SceneObject};
use crate::core::game_object::GameObject;
use crate::core::settings::Settings;
use crate::core::ui::UiElement;

//=== SceneBase ===========================================================

pub struct SceneBase {
    name: String,
    root_game_objects: Vec<GameObject>,
    ui_elements: Vec<Box<dyn UiElement>>,
    settings: Settings,
    environment_tile_map_path: Option<String>,
    awake: bool,
    loaded: bool,
    started: bool,
    suspended: bool,
}

impl SceneBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root_game_objects: Vec::new(),
            ui_elements: Vec::new(),
            settings: Settings::new(),
            environment_tile_map_path: None,
            awake: false,
            loaded: false,
            started: false,
            suspended: false,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_game_objects(&self) -> &[GameObject] {
        &self.root_game_objects
    }

    pub fn root_game_objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.root_game_objects
    }

    pub fn ui_elements(&self) -> &[Box<dyn UiElement>] {
        &self.ui_elements
    }

    pub fn find_game_object(&self, name: &str) -> Option<&GameObject> {
        self.root_game_objects.iter().find(|o| o.name() == name)
    }

    pub fn find_ui_element(&self, name: &str) -> Option<&dyn UiElement> {
        self.ui_elements
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }

    /// Appends a game object or UI element to the root collections.
    ///
    /// Meant for construction time, i.e. from `awake` or `load`.
    pub fn add(&mut self, object: impl Into<SceneObject>) {
        match object.into() {
            SceneObject::GameObject(object) => {
                debug!("[{}] Adding game object {}", self.name, object.name());
                self.root_game_objects.push(object);
            }
            SceneObject::UiElement(element) => {
                debug!("[{}] Adding UI element {}", self.name, element.name());
                self.ui_elements.push(element);
            }
        }
    }

    //--- Settings ---------------------------------------------------------

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn environment_tile_map_path(&self) -> Option<&str> {
        self.environment_tile_map_path.as_deref()
    }

    pub fn set_environment_tile_map_path(&mut self, path: impl Into<String>) {
        self.environment_tile_map_path = Some(path.into());
    }

    //--- Lifecycle Flags --------------------------------------------------

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Marks the scene as awakened; `awake` will not be invoked again.
    pub fn mark_awake(&mut self) {
        self.awake = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    //--- Lifecycle --------------------------------------------------------

    pub fn load(&mut self) {
        self.loaded = true;
    }

    pub fn unload(&mut self) {
        self.loaded = false;
    }

    pub fn start(&mut self) {
        for object in &mut self.root_game_objects {
            object.start();
        }
        for element in &mut self.ui_elements {
            element.start();
        }
        self.started = true;
        self.suspended = false;
    }

    pub fn stop(&mut self) {
        for object in &mut self.root_game_objects {
            object.stop();
        }
        for element in &mut self.ui_elements {
            element.stop();
        }
        self.started = false;
    }

    pub fn update(&mut self) {
        if self.suspended {
            return;
        }
        for object in &mut self.root_game_objects {
            object.update();
        }
        for element in &mut self.ui_elements {
            element.update();
        }
    }

    pub fn fixed_update(&mut self) {
        if self.suspended {
            return;
        }
        for object in &mut self.root_game_objects {
            object.fixed_update();
        }
    }

    pub fn render(&self) {
        for object in &self.root_game_objects {
            object.render();
        }
        for element in &self.ui_elements {
            element.render();
        }
    }

    pub fn render_at(&self, x: Option<i32>, y: Option<i32>) {
        for element in &self.ui_elements {
            element.render_at(x, y);
        }
    }

    pub fn erase(&self) {
        for object in &self.root_game_objects {
            object.erase();
        }
        for element in &self.ui_elements {
            element.erase();
        }
    }

    pub fn erase_at(&self, x: Option<i32>, y: Option<i32>) {
        for element in &self.ui_elements {
            element.erase_at(x, y);
        }
    }

    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }
}

impl std::fmt::Debug for SceneBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ui: Vec<_> = self.ui_elements.iter().map(|e| e.name()).collect();

        f.debug_struct("SceneBase")
            .field("name", &self.name)
            .field("root_game_objects", &self.root_game_objects)
            .field("ui_elements", &ui)
            .field("settings", &self.settings)
            .field("awake", &self.awake)
            .field("loaded", &self.loaded)
            .field("started", &self.started)
            .field("suspended", &self.suspended)
            .finish()
    }
}

//=== BasicScene ==========================================================

/// Named scene populated by hand.
#[derive(Debug)]
pub struct BasicScene {
    base: SceneBase,
}

impl BasicScene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: SceneBase::new(name),
        }
    }

    /// Builder-style [`SceneBase::add`].
    pub fn with(mut self, object: impl Into<SceneObject>) -> Self {
        self.base.add(object);
        self
    }
}

impl Scene for BasicScene {
    fn base(&self) -> &SceneBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vector2;
    use crate::core::ui::{Label, UiElementArgs};

    fn label(name: &str) -> Box<dyn UiElement> {
        Box::new(Label::new(UiElementArgs {
            scene: "Level".to_string(),
            name: name.to_string(),
            position: Vector2::ZERO,
            size: Vector2::new(8, 1),
        }))
    }

    #[test]
    fn add_routes_objects_to_their_collection() {
        let scene = BasicScene::new("Level")
            .with(GameObject::named("Player"))
            .with(label("Score"));

        assert_eq!(scene.name(), "Level");
        assert_eq!(scene.root_game_objects().len(), 1);
        assert_eq!(scene.base().ui_elements().len(), 1);
        assert!(scene.base().find_game_object("Player").is_some());
        assert!(scene.base().find_ui_element("Score").is_some());
    }

    #[test]
    fn settings_are_replaced_by_value() {
        let mut scene = BasicScene::new("Level");
        let mut settings = Settings::new();
        settings.insert("fps", 30);

        scene.load_scene_settings(settings.clone());
        settings.insert("fps", 60);

        assert_eq!(scene.base().setting("fps"), Some(&Value::from(30)));
    }

    #[test]
    fn lifecycle_flags_follow_hooks() {
        let mut scene = BasicScene::new("Level");

        scene.load();
        scene.start();
        assert!(scene.base().is_loaded());
        assert!(scene.base().is_started());

        scene.suspend();
        assert!(scene.base().is_suspended());
        scene.resume();
        assert!(!scene.base().is_suspended());

        scene.stop();
        scene.unload();
        assert!(!scene.base().is_started());
        assert!(!scene.base().is_loaded());
        assert!(!scene.base().is_awake());
    }
}
