//=========================================================================
// Game States
//=========================================================================
//
// Thin state machine above the scene manager.
//
// Architecture:
//   Game
//     ├─ states: HashMap<String, Box<dyn GameState>>
//     ├─ current: String
//     └─ context: GameStateContext ──► SceneManager, EventManager, ...
//
// Flow:
//   tick → current.update() → requests drained → current.render()
//
// States never hold the game itself; they queue StateRequests that the
// game applies at the tick boundary.
//
//=========================================================================

//=== Module Declarations =================================================

mod context;
mod paused_state;
mod scene_state;
mod transition_queue;

//=== Public API ==========================================================

pub use context::GameStateContext;
pub use paused_state::PausedState;
pub use scene_state::SceneState;
pub use transition_queue::{StateRequest, StateRequestQueue};

//=== StateBindings =======================================================

/// Collaborator handles held by a state.
///
/// Rebound from a fresh context on every enter and exit, so a state
/// always talks to the systems of the context it was last given.
#[derive(Clone)]
pub struct StateBindings {
    context: GameStateContext,
}

impl StateBindings {
    pub fn new(context: &GameStateContext) -> Self {
        Self {
            context: context.clone(),
        }
    }

    pub fn rebind(&mut self, context: &GameStateContext) {
        self.context = context.clone();
    }

    pub fn context(&self) -> &GameStateContext {
        &self.context
    }
}

//=== GameState Trait =====================================================

/// A state of the game (playing a scene, paused, ...).
pub trait GameState {
    fn bindings(&self) -> &StateBindings;

    fn bindings_mut(&mut self) -> &mut StateBindings;

    /// Called when the state becomes current.
    fn enter(&mut self, context: &GameStateContext) {
        self.bindings_mut().rebind(context);
    }

    /// Called when the state stops being current.
    fn exit(&mut self, context: &GameStateContext) {
        self.bindings_mut().rebind(context);
    }

    fn update(&mut self);

    fn render(&self);

    fn suspend(&mut self);

    fn resume(&mut self);
}
