//=========================================================================
// State Tracker
//=========================================================================
//
// Keyboard state as a terminal reports it.
//
// Terminals resend KeyDown while a key is held (auto-repeat) and many
// never send KeyUp at all. The tracker therefore distinguishes the first
// report of a key (pressed) from repeats, and can release a key on its own
// once it has gone more than `hold_timeout` frames without a report.
//
// Frame lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers};

//=== StateTracker ========================================================

/// Held keys plus the per-frame pressed / repeated / released deltas.
#[derive(Debug, Default)]
pub struct StateTracker {
    /// Held keys and the number of frames since each was last reported.
    held: HashMap<KeyCode, u32>,
    modifiers: Modifiers,

    /// Frames a held key may go unreported before it counts as released.
    /// `None` waits for an explicit KeyUp.
    hold_timeout: Option<u32>,

    pressed: HashSet<KeyCode>,
    repeated: HashSet<KeyCode>,
    released: HashSet<KeyCode>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker for terminals without key-up reporting.
    ///
    /// A key that goes more than `frames` frames without a report is
    /// released at the start of the next frame. `frames` is clamped to at
    /// least 1.
    pub fn with_hold_timeout(frames: u32) -> Self {
        Self {
            hold_timeout: Some(frames.max(1)),
            ..Self::default()
        }
    }

    pub fn hold_timeout(&self) -> Option<u32> {
        self.hold_timeout
    }

    //--- Frame Processing -------------------------------------------------

    /// Starts a new frame: drops last frame's deltas and ages held keys,
    /// releasing the ones past the hold timeout.
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.repeated.clear();
        self.released.clear();

        for frames in self.held.values_mut() {
            *frames = frames.saturating_add(1);
        }

        if let Some(timeout) = self.hold_timeout {
            let released = &mut self.released;
            self.held.retain(|key, frames| {
                let keep = *frames <= timeout;
                if !keep {
                    released.insert(*key);
                }
                keep
            });
        }
    }

    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown { key, modifiers } => {
                    self.modifiers = modifiers;
                    self.key_reported(key);
                }
                InputEvent::KeyUp { key, modifiers } => {
                    self.modifiers = modifiers;
                    if self.held.remove(&key).is_some() {
                        self.released.insert(key);
                    }
                }
                InputEvent::Unidentified => {}
            }
        }
    }

    fn key_reported(&mut self, key: KeyCode) {
        match self.held.insert(key, 0) {
            None => {
                self.pressed.insert(key);
                // A key released and pressed again within one frame is a
                // fresh press, not a release.
                self.released.remove(&key);
            }
            Some(_) => {
                self.repeated.insert(key);
            }
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// First report of the key since it was last released.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Auto-repeat report of a key already held.
    pub fn is_key_repeated(&self, key: KeyCode) -> bool {
        self.repeated.contains(&key)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains_key(&key)
    }

    /// Released this frame, by KeyUp or by hold timeout.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.released.contains(&key)
    }

    /// Modifiers reported with the last key event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.held.keys()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
