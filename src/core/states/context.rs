//=========================================================================
// Game State Context
//=========================================================================
//
// Bundle of shared collaborator handles handed to every state on enter
// and exit. Cloning the context clones the handles, not the systems.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use super::{StateRequest, StateRequestQueue};
use crate::core::error::SceneId;
use crate::core::events::EventManager;
use crate::core::input::{KeyCode, StateTracker};
use crate::core::notifications::NotificationsManager;
use crate::core::scene::SceneManager;
use crate::core::settings::{Settings, SettingsKey};
use crate::core::ui::{ModalManager, UiManager};

//=== GameStateContext ====================================================

#[derive(Clone)]
pub struct GameStateContext {
    pub scene_manager: Rc<RefCell<SceneManager>>,
    pub event_manager: Rc<RefCell<EventManager>>,
    pub modal_manager: Rc<RefCell<ModalManager>>,
    pub notifications_manager: Rc<RefCell<NotificationsManager>>,
    pub ui_manager: Rc<RefCell<UiManager>>,
    pub input: Rc<RefCell<StateTracker>>,
    pub settings: Rc<RefCell<Settings>>,
    pub requests: Rc<RefCell<StateRequestQueue>>,
}

impl GameStateContext {
    /// Context around an existing scene manager; the event manager is the
    /// one the scene manager publishes to. Other systems start empty.
    pub fn new(scene_manager: SceneManager) -> Self {
        let event_manager = scene_manager.event_manager();

        Self {
            scene_manager: Rc::new(RefCell::new(scene_manager)),
            event_manager,
            modal_manager: Rc::new(RefCell::new(ModalManager::new())),
            notifications_manager: Rc::new(RefCell::new(NotificationsManager::new())),
            ui_manager: Rc::new(RefCell::new(UiManager::new())),
            input: Rc::new(RefCell::new(StateTracker::new())),
            settings: Rc::new(RefCell::new(Settings::new())),
            requests: Rc::new(RefCell::new(StateRequestQueue::new())),
        }
    }

    pub fn with_settings(self, settings: Settings) -> Self {
        *self.settings.borrow_mut() = settings;
        self
    }

    /// Key configured under `pause_key`, if any.
    pub fn pause_key(&self) -> Option<KeyCode> {
        self.settings
            .borrow()
            .key_code(SettingsKey::PauseKey.as_str())
    }

    pub fn request(&self, request: StateRequest) {
        self.requests.borrow_mut().push(request);
    }

    /// Asks the game to activate a scene at the next tick boundary.
    ///
    /// Safe to call from scene, component, and listener code that runs
    /// while the scene manager is borrowed.
    pub fn load_scene(&self, id: impl Into<SceneId>) {
        self.requests.borrow_mut().load_scene(id);
    }

    /// Asks the game to go back one scene at the next tick boundary.
    pub fn load_previous_scene(&self) {
        self.requests.borrow_mut().load_previous_scene();
    }
}

//=========================================================================
// Tests
//=========================================================================
