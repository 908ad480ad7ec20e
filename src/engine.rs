//=========================================================================
// Aetheric Console Game
//
// Main entry point and coordinator for a running game.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Tick loop @ TPS]
//         │                        │
//         ├─ with_tps()            ├─ states (scene, paused, ...)
//         ├─ with_physics()        ├─ GameStateContext
//         └─ from_config()         └─ input channel (external pollers)
// ```
//
// Each tick: drain input → update current state → apply state requests
// (state switches, scene loads, quit) → render current state → clear
// event queues.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::config::{GameConfig, DEFAULT_SCENE_FILE_EXTENSION};
use crate::core::events::EventManager;
use crate::core::input::{InputEvent, StateTracker};
use crate::core::physics::{ColliderRegistry, Physics};
use crate::core::scene::SceneManager;
use crate::core::settings::{Settings, SettingsKey};
use crate::core::states::{GameState, GameStateContext, PausedState, SceneState, StateRequest};

//=== TickControl =========================================================
//
// Control flow signal returned by each tick.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Input channel capacity**: 128 batches
/// - **Scene file extension**: `.scene.json`
/// - **Physics**: [`ColliderRegistry`]
///
/// # Examples
///
/// ```no_run
/// use aetheric_console::GameBuilder;
/// use aetheric_console::core::scene::{scene_ref, BasicScene};
///
/// let mut game = GameBuilder::new().with_tps(30.0).build();
/// game.init(|ctx| {
///     let mut manager = ctx.scene_manager.borrow_mut();
///     manager.add_scene(scene_ref(BasicScene::new("Title")));
///     manager.load_scene("Title").unwrap();
/// });
/// game.run();
/// ```
pub struct GameBuilder {
    tps: f64,
    input_channel_capacity: usize,
    scene_file_extension: String,
    history_limit: Option<usize>,
    input_hold_timeout: Option<u32>,
    settings: Settings,
    physics: Option<Box<dyn Physics>>,
}

impl GameBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            input_channel_capacity: 128,
            scene_file_extension: DEFAULT_SCENE_FILE_EXTENSION.to_string(),
            history_limit: None,
            input_hold_timeout: None,
            settings: Settings::new(),
            physics: None,
        }
    }

    /// Builder seeded from a loaded [`GameConfig`].
    ///
    /// Screen dimensions are copied into the settings unless the settings
    /// table already names them.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut settings = config.settings.clone();
        for (key, value) in [
            (SettingsKey::ScreenWidth, config.screen_width),
            (SettingsKey::ScreenHeight, config.screen_height),
        ] {
            if !settings.contains_key(key.as_str()) {
                settings.insert(key.as_str(), value);
            }
        }

        Self::new()
            .with_tps(config.tps)
            .with_input_channel_capacity(config.input_channel_capacity)
            .with_scene_file_extension(config.scene_file_extension.clone())
            .with_history_limit(config.history_limit)
            .with_input_hold_timeout(config.input_hold_timeout)
            .with_settings(settings)
    }

    /// Sets the target ticks per second of [`Game::run`].
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets how many input batches external pollers may queue between ticks.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_input_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.input_channel_capacity = capacity;
        self
    }

    pub fn with_scene_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.scene_file_extension = extension.into();
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Releases keys the terminal stops reporting after `frames` frames.
    /// `None` (default) waits for key-up events.
    pub fn with_input_hold_timeout(mut self, frames: Option<u32>) -> Self {
        self.input_hold_timeout = frames;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_physics(mut self, physics: Box<dyn Physics>) -> Self {
        self.physics = Some(physics);
        self
    }

    /// Builds the game.
    ///
    /// The scene manager receives a copy of the settings; the "scene" and
    /// "paused" states are registered and "scene" is entered.
    pub fn build(self) -> Game {
        info!(
            "Building game (TPS: {}, input channel: {})",
            self.tps, self.input_channel_capacity
        );

        let event_manager = Rc::new(RefCell::new(EventManager::new()));
        let physics = self
            .physics
            .unwrap_or_else(|| Box::new(ColliderRegistry::new()));

        let mut scene_manager = SceneManager::new(event_manager, physics);
        scene_manager.set_scene_file_extension(self.scene_file_extension);
        scene_manager.set_history_limit(self.history_limit);
        scene_manager.load_settings(self.settings.clone());

        let context = GameStateContext::new(scene_manager).with_settings(self.settings);
        if let Some(frames) = self.input_hold_timeout {
            *context.input.borrow_mut() = StateTracker::with_hold_timeout(frames);
        }
        let (input_tx, input_rx) = bounded(self.input_channel_capacity);

        let mut game = Game {
            context,
            states: HashMap::new(),
            current: None,
            tps: self.tps,
            input_tx,
            input_rx,
        };

        let scene_state = SceneState::new(&game.context);
        let paused_state = PausedState::new(&game.context);
        game.add_state(SceneState::NAME, Box::new(scene_state));
        game.add_state(PausedState::NAME, Box::new(paused_state));
        game.set_state(SceneState::NAME);

        game
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// Running game: a set of named states over one shared context.
///
/// Create via [`GameBuilder`].
pub struct Game {
    context: GameStateContext,
    states: HashMap<String, Box<dyn GameState>>,
    current: Option<String>,
    tps: f64,
    input_tx: Sender<Vec<InputEvent>>,
    input_rx: Receiver<Vec<InputEvent>>,
}

impl Game {
    //--- Initialization ---------------------------------------------------

    /// Gives access to the shared systems before the loop starts
    /// (scene registration, settings, UI overlays).
    pub fn init<F>(&mut self, init_fn: F) -> &mut Self
    where
        F: FnOnce(&GameStateContext),
    {
        info!("Initializing game systems");
        init_fn(&self.context);
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn context(&self) -> &GameStateContext {
        &self.context
    }

    pub fn scene_manager(&self) -> Rc<RefCell<SceneManager>> {
        Rc::clone(&self.context.scene_manager)
    }

    /// Sender for external input pollers. One batch per poll.
    pub fn input_sender(&self) -> Sender<Vec<InputEvent>> {
        self.input_tx.clone()
    }

    /// Queues a batch of input from the game thread itself.
    ///
    /// The batch is dropped with a warning when the channel is full.
    pub fn push_input(&self, batch: Vec<InputEvent>) {
        if let Err(TrySendError::Full(_)) = self.input_tx.try_send(batch) {
            warn!("Input channel full, dropping batch");
        }
    }

    pub fn tps(&self) -> f64 {
        self.tps
    }

    //--- States -----------------------------------------------------------

    /// Registers a state under `name`, replacing any previous one.
    pub fn add_state(&mut self, name: impl Into<String>, state: Box<dyn GameState>) {
        let name = name.into();
        if self.states.insert(name.clone(), state).is_some() {
            warn!("Replacing game state '{}'", name);
        }
    }

    pub fn current_state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Makes the state registered under `name` current.
    ///
    /// Unregistered names are a logged no-op and return `false`.
    pub fn set_state(&mut self, name: &str) -> bool {
        if !self.states.contains_key(name) {
            warn!("No game state registered under '{}'", name);
            return false;
        }

        if self.current.as_deref() == Some(name) {
            return true;
        }

        let context = self.context.clone();

        if let Some(current) = &self.current {
            if let Some(state) = self.states.get_mut(current) {
                state.exit(&context);
            }
        }

        if let Some(state) = self.states.get_mut(name) {
            state.enter(&context);
        }

        debug!("Game state: {:?} -> {}", self.current, name);
        self.current = Some(name.to_string());
        true
    }

    /// Asks the loop to stop after the current tick.
    pub fn quit(&self) {
        self.context.request(StateRequest::Quit);
    }

    //--- Execution --------------------------------------------------------

    /// Runs one frame.
    pub fn tick(&mut self) -> TickControl {
        //--- 1. Gather input --------------------------------------------
        self.collect_input();

        //--- 2. Update --------------------------------------------------
        if let Some(state) = self.current_state_mut() {
            state.update();
        }
        self.context.ui_manager.borrow_mut().update();

        //--- 3. Apply state requests ------------------------------------
        let control = self.process_requests();

        //--- 4. Render --------------------------------------------------
        if let Some(state) = self.current.as_ref().and_then(|name| self.states.get(name)) {
            state.render();
        }
        self.context.ui_manager.borrow().render();

        //--- 5. Frame events are consumed -------------------------------
        self.context.event_manager.borrow_mut().clear_all();

        control
    }

    /// Runs ticks at the configured TPS until a quit request.
    ///
    /// On exit the active scene is stopped and unloaded.
    pub fn run(&mut self) {
        info!("Starting game loop (TPS: {})", self.tps);
        let frame_duration = Duration::from_secs_f64(1.0 / self.tps);

        loop {
            let frame_start = Instant::now();

            if let TickControl::Exit = self.tick() {
                info!("Quit requested");
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }

        let mut scene_manager = self.context.scene_manager.borrow_mut();
        scene_manager.stop();
        scene_manager.unload();
        info!("Game shutdown complete");
    }

    //--- Internals --------------------------------------------------------

    fn current_state_mut(&mut self) -> Option<&mut Box<dyn GameState>> {
        let name = self.current.as_ref()?;
        self.states.get_mut(name)
    }

    fn collect_input(&mut self) {
        let mut input = self.context.input.borrow_mut();
        input.clear();

        while let Ok(batch) = self.input_rx.try_recv() {
            input.process_events(&batch);
        }
    }

    fn process_requests(&mut self) -> TickControl {
        let requests = self.context.requests.borrow_mut().take();
        let mut control = TickControl::Continue;

        for request in requests {
            match request {
                StateRequest::Switch(name) => {
                    self.set_state(&name);
                }
                StateRequest::LoadScene(id) => {
                    let result = self.context.scene_manager.borrow_mut().load_scene(id);
                    if let Err(e) = result {
                        error!("Requested scene load failed: {}", e);
                    }
                }
                StateRequest::LoadPreviousScene => {
                    let result = self.context.scene_manager.borrow_mut().load_previous_scene();
                    if let Err(e) = result {
                        error!("Requested previous scene load failed: {}", e);
                    }
                }
                StateRequest::Quit => control = TickControl::Exit,
            }
        }

        control
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
