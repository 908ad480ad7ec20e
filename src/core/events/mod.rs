//=========================================================================
// Events
//=========================================================================
//
// Typed publish/subscribe between engine subsystems.
//
// Pattern: dispatch → listeners + queue → read (N consumers) → clear
//
//=========================================================================

//=== Module Declarations =================================================

mod event_manager;
mod event_queue;

//=== Public API ==========================================================

pub use event_manager::EventManager;

/// Marker trait for types that can be dispatched through the EventManager.
///
/// Automatically implemented for all `'static` types.
pub trait Event: 'static {}

impl<T: 'static> Event for T {}

/// Handle returned by [`EventManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

//=== Scene Events ========================================================

/// Scene lifecycle notification kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneEventType {
    /// A scene load was requested.
    LoadStart,
    /// The new active scene finished loading.
    LoadEnd,
    /// The active scene finished its per-tick update.
    Update,
    /// The active scene finished its physics update.
    UpdatePhysics,
}

/// Event published by the scene manager.
///
/// `scene` carries the active scene's name where one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEvent {
    pub kind: SceneEventType,
    pub scene: Option<String>,
}

impl SceneEvent {
    pub fn new(kind: SceneEventType) -> Self {
        Self { kind, scene: None }
    }

    pub fn with_scene(kind: SceneEventType, scene: impl Into<String>) -> Self {
        Self {
            kind,
            scene: Some(scene.into()),
        }
    }
}
