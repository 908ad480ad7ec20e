//=========================================================================
// Core Systems
//
// Every subsystem the game loop drives, one module each.
//
// Layout:
// - `scene`, `metadata`: scene registry, history and scene documents
// - `states`: game states over a shared context
// - `game_object`, `ui`, `physics`: what scenes are made of
// - `events`, `input`, `notifications`: per-tick collaborators
// - `config`, `settings`, `logging`, `error`, `math`: ambient support
//
//=========================================================================

pub mod config;
pub mod error;
pub mod events;
pub mod game_object;
pub mod input;
pub mod logging;
pub mod math;
pub mod metadata;
pub mod notifications;
pub mod physics;
pub mod scene;
pub mod settings;
pub mod states;
pub mod ui;
