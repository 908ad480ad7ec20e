//=========================================================================
// Scene System
//=========================================================================
//
// Scenes, scene history, and the manager that activates them.
//
// Architecture:
//   SceneManager
//     ├─ scenes: Vec<SceneRef>          (registry, insertion ordered)
//     ├─ history: SceneHistory          (stack of SceneNode)
//     ├─ registry: ObjectRegistry       (tag → factory)
//     └─ physics: Box<dyn Physics>
//
// Flow:
//   load_scene(id) → stop → unload → push node → load → start
//   update()       → update_physics → scene.update
//
//=========================================================================

//=== Module Declarations =================================================

mod metadata_scene;
mod registry;
mod scene_base;
mod scene_manager;
mod scene_node;

//=== Public API ==========================================================

pub use metadata_scene::MetadataScene;
pub use registry::{ComponentFactory, ObjectRegistry, UiElementFactory};
pub use scene_base::{BasicScene, SceneBase};
pub use scene_manager::SceneManager;
pub use scene_node::{SceneHistory, SceneNode};

pub use crate::core::metadata::GAME_OBJECT_TYPE;

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::game_object::GameObject;
use crate::core::settings::Settings;
use crate::core::ui::UiElement;

//=== SceneRef ============================================================

/// Shared handle to a registered scene.
///
/// The same scene may be registered more than once; handles are compared
/// by identity (`Rc::ptr_eq`) when removing.
pub type SceneRef = Rc<RefCell<dyn Scene>>;

/// Wraps a scene into a [`SceneRef`].
pub fn scene_ref<S: Scene + 'static>(scene: S) -> SceneRef {
    Rc::new(RefCell::new(scene))
}

//=== SceneObject =========================================================

/// Anything that can be placed in a scene's root collection.
pub enum SceneObject {
    GameObject(GameObject),
    UiElement(Box<dyn UiElement>),
}

impl SceneObject {
    pub fn name(&self) -> &str {
        match self {
            Self::GameObject(object) => object.name(),
            Self::UiElement(element) => element.name(),
        }
    }
}

impl From<GameObject> for SceneObject {
    fn from(object: GameObject) -> Self {
        Self::GameObject(object)
    }
}

impl From<Box<dyn UiElement>> for SceneObject {
    fn from(element: Box<dyn UiElement>) -> Self {
        Self::UiElement(element)
    }
}

//=== Scene Trait =========================================================

/// Container of game objects and UI elements with lifecycle hooks.
///
/// Implementors only provide access to their [`SceneBase`]. Every hook
/// defaults to the base behavior and can be overridden.
///
/// # Lifecycle
///
/// ```text
/// awake (once) → load → start → update/render ... → stop → unload
/// ```
///
/// `awake` is called lazily by the scene manager the first time the scene
/// is activated, before its colliders are registered with physics.
pub trait Scene {
    fn base(&self) -> &SceneBase;

    fn base_mut(&mut self) -> &mut SceneBase;

    //--- Provided ---------------------------------------------------------

    fn name(&self) -> &str {
        self.base().name()
    }

    fn root_game_objects(&self) -> &[GameObject] {
        self.base().root_game_objects()
    }

    /// Replaces the scene settings with a copy taken at load time.
    fn load_scene_settings(&mut self, settings: Settings) {
        self.base_mut().set_settings(settings);
    }

    //--- Hooks ------------------------------------------------------------

    /// Builds the scene content. Called at most once.
    fn awake(&mut self) -> Result<(), SceneError> {
        Ok(())
    }

    fn load(&mut self) {
        self.base_mut().load();
    }

    fn unload(&mut self) {
        self.base_mut().unload();
    }

    fn start(&mut self) {
        self.base_mut().start();
    }

    fn stop(&mut self) {
        self.base_mut().stop();
    }

    fn update(&mut self) {
        self.base_mut().update();
    }

    fn update_physics(&mut self) {
        self.base_mut().fixed_update();
    }

    fn render(&self) {
        self.base().render();
    }

    fn render_at(&self, x: Option<i32>, y: Option<i32>) {
        self.base().render_at(x, y);
    }

    fn erase(&self) {
        self.base().erase();
    }

    fn erase_at(&self, x: Option<i32>, y: Option<i32>) {
        self.base().erase_at(x, y);
    }

    fn suspend(&mut self) {
        self.base_mut().suspend();
    }

    fn resume(&mut self) {
        self.base_mut().resume();
    }
}
