//=========================================================================
// Scene State
//=========================================================================
//
// Default gameplay state: drives the active scene and notifications.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{GameState, GameStateContext, PausedState, StateBindings, StateRequest};

//=== SceneState ==========================================================

pub struct SceneState {
    bindings: StateBindings,
}

impl SceneState {
    pub const NAME: &'static str = "scene";

    pub fn new(context: &GameStateContext) -> Self {
        Self {
            bindings: StateBindings::new(context),
        }
    }

    fn pause_requested(&self) -> bool {
        let context = self.bindings.context();
        context
            .pause_key()
            .is_some_and(|key| context.input.borrow().is_key_pressed(key))
    }
}

impl GameState for SceneState {
    fn bindings(&self) -> &StateBindings {
        &self.bindings
    }

    fn bindings_mut(&mut self) -> &mut StateBindings {
        &mut self.bindings
    }

    /// Ticks the scene and notifications, unless the pause key was just
    /// pressed: that tick only asks for the paused state.
    fn update(&mut self) {
        if self.pause_requested() {
            self.suspend();
            return;
        }

        let context = self.bindings.context();
        context.scene_manager.borrow_mut().update();
        context.notifications_manager.borrow_mut().update();
    }

    fn render(&self) {
        self.bindings.context().scene_manager.borrow().render();
    }

    /// Asks the game to switch to the paused state.
    fn suspend(&mut self) {
        debug!("Scene state suspending");
        self.bindings
            .context()
            .request(StateRequest::Switch(PausedState::NAME.to_string()));
    }

    fn resume(&mut self) {}
}

//=========================================================================
// Tests
//=========================================================================
