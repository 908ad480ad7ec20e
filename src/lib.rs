//=========================================================================
// Aetheric Console - Library Root
//
// Scene and game-state core for a terminal-rendered game engine.
//
// Responsibilities:
// - Expose the game facade (`Game`, `GameBuilder`)
// - Expose the core systems for games that drive scenes directly
//
// Typical usage:
// ```no_run
// use aetheric_console::GameBuilder;
// use aetheric_console::core::config::GameConfig;
// use aetheric_console::core::logging;
//
// let config = GameConfig::load_from_file("game.toml").unwrap_or_default();
// logging::init(&config.logging);
//
// let mut game = GameBuilder::from_config(&config).build();
// game.run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every subsystem (scenes, states, metadata, input, ...).
// Most games only need the `Game` facade and the prelude.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the game loop and its builder.
//
mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{Game, GameBuilder, TickControl};
