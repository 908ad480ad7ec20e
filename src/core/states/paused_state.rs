//=========================================================================
// Paused State
//=========================================================================
//
// Keeps rendering the active scene without updating it. The scene is
// suspended on enter and resumed on exit; a modal is shown meanwhile.
//
//=========================================================================

use log::debug;

use super::{GameState, GameStateContext, SceneState, StateBindings, StateRequest};

pub struct PausedState {
    bindings: StateBindings,
}

impl PausedState {
    pub const NAME: &'static str = "paused";

    pub fn new(context: &GameStateContext) -> Self {
        Self {
            bindings: StateBindings::new(context),
        }
    }
}

impl GameState for PausedState {
    fn bindings(&self) -> &StateBindings {
        &self.bindings
    }

    fn bindings_mut(&mut self) -> &mut StateBindings {
        &mut self.bindings
    }

    fn enter(&mut self, context: &GameStateContext) {
        self.bindings.rebind(context);
        debug!("Entering paused state");

        let hint = match context.pause_key() {
            Some(key) => format!("Press {:?} to resume", key),
            None => String::new(),
        };
        context.modal_manager.borrow_mut().show("Paused", hint);
        context.scene_manager.borrow_mut().suspend();
    }

    fn exit(&mut self, context: &GameStateContext) {
        self.bindings.rebind(context);
        context.modal_manager.borrow_mut().dismiss();
        context.scene_manager.borrow_mut().resume();
    }

    fn update(&mut self) {
        let context = self.bindings.context();
        let resume = context
            .pause_key()
            .is_some_and(|key| context.input.borrow().is_key_pressed(key));

        if resume {
            self.resume();
        }
    }

    fn render(&self) {
        self.bindings.context().scene_manager.borrow().render();
    }

    fn suspend(&mut self) {}

    /// Asks the game to switch back to the scene state.
    fn resume(&mut self) {
        self.bindings
            .context()
            .request(StateRequest::Switch(SceneState::NAME.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::EventManager;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::physics::ColliderRegistry;
    use crate::core::scene::{scene_ref, BasicScene, SceneManager};
    use crate::core::settings::Settings;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn context() -> GameStateContext {
        let events = Rc::new(RefCell::new(EventManager::new()));
        let mut manager = SceneManager::new(events, Box::new(ColliderRegistry::new()));
        manager.add_scene(scene_ref(BasicScene::new("Level")));
        manager.load_scene(0).unwrap();

        let mut settings = Settings::new();
        settings.insert("pause_key", "Escape");
        GameStateContext::new(manager).with_settings(settings)
    }

    fn active_is_suspended(ctx: &GameStateContext) -> bool {
        let manager = ctx.scene_manager.borrow();
        let suspended = manager
            .active_scene()
            .is_some_and(|scene| scene.borrow().base().is_suspended());
        suspended
    }

    #[test]
    fn enter_and_exit_toggle_scene_suspension() {
        let ctx = context();
        let mut state = PausedState::new(&ctx);

        state.enter(&ctx);
        assert!(active_is_suspended(&ctx));
        assert_eq!(ctx.modal_manager.borrow().top().unwrap().title, "Paused");

        state.exit(&ctx);
        assert!(!active_is_suspended(&ctx));
        assert!(!ctx.modal_manager.borrow().is_showing());
    }

    #[test]
    fn update_does_not_tick_the_scene() {
        let ctx = context();
        let mut state = PausedState::new(&ctx);
        ctx.event_manager.borrow_mut().clear_all();

        state.update();

        assert_eq!(
            ctx.event_manager
                .borrow()
                .count::<crate::core::events::SceneEvent>(),
            0
        );
        assert!(ctx.requests.borrow().is_empty());
    }

    #[test]
    fn pause_key_resumes_scene_state() {
        let ctx = context();
        let mut state = PausedState::new(&ctx);
        ctx.input
            .borrow_mut()
            .process_events(&[InputEvent::key_down(KeyCode::Escape)]);

        state.update();

        assert_eq!(
            ctx.requests.borrow_mut().take(),
            [StateRequest::Switch("scene".to_string())]
        );
    }
}
