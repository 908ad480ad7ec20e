//=========================================================================
// State Request Queue
//=========================================================================
//
// Queue for game state requests.
//
// States, scenes and components queue requests here during update. The
// game drains this queue at the tick boundary, after the current state's
// update, when nothing else holds the scene manager.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::error::SceneId;

//=== StateRequest ========================================================

/// Request issued by a state to the owning game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateRequest {
    /// Make the state registered under this name current.
    Switch(String),

    /// Activate a registered scene by index or name.
    LoadScene(SceneId),

    /// Go back to the scene below the active one in the history.
    LoadPreviousScene,

    /// Stop the game loop after the current tick.
    Quit,
}

//=== StateRequestQueue ===================================================

/// FIFO of pending state requests.
#[derive(Debug, Default)]
pub struct StateRequestQueue {
    queue: Vec<StateRequest>,
}

impl StateRequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a request to be processed at the next tick boundary.
    pub fn push(&mut self, request: StateRequest) {
        self.queue.push(request);
    }

    /// Queues a switch to the state named `name`.
    pub fn switch_to(&mut self, name: impl Into<String>) {
        self.push(StateRequest::Switch(name.into()));
    }

    /// Queues activation of the scene identified by `id`.
    pub fn load_scene(&mut self, id: impl Into<SceneId>) {
        self.push(StateRequest::LoadScene(id.into()));
    }

    pub fn load_previous_scene(&mut self) {
        self.push(StateRequest::LoadPreviousScene);
    }

    pub fn quit(&mut self) {
        self.push(StateRequest::Quit);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateRequest> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<StateRequest> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Tests
//=========================================================================
