//=========================================================================
// Input
//
// Keyboard state consumed by game states (pause key, menus, ...).
//
// Responsibilities:
// - Define portable key and event types
// - Track held keys and per-frame press/release deltas
//
// Notes:
// Terminal polling is an external collaborator. Pollers send batches of
// `InputEvent` through the game's input channel; the game feeds them to
// the shared `StateTracker` once per tick, before states update.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers};
pub use state_tracker::StateTracker;
