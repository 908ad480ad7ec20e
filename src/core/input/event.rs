//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level keyboard input.
//
// This module abstracts away terminal-specific key reporting into a
// unified, engine-friendly format consumed by the input state tracker.
// Polling the terminal itself happens outside the engine core; pollers
// translate whatever they read into `InputEvent`s and push them into the
// game's input channel.
//
// Event Flow:
// ```text
// Terminal Poller (external)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (processes events)
//         ↓
//    Game states (pause key, menus, ...)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

//=== KeyCode =============================================================

/// Keyboard key identifier.
///
/// Serialized by variant name (`"Escape"`, `"KeyP"`, ...) so that keys
/// can be bound from settings and configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not mapped by the poller.
    Unidentified
}

impl KeyCode {
    /// Maps a typed character to its key, ignoring case.
    ///
    /// Returns `Unidentified` for characters without a dedicated key.
    pub fn from_char(c: char) -> Self {
        use KeyCode::*;
        const LETTERS: [KeyCode; 26] = [
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
            KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
            KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
        ];
        const DIGITS: [KeyCode; 10] = [
            Digit0, Digit1, Digit2, Digit3, Digit4,
            Digit5, Digit6, Digit7, Digit8, Digit9,
        ];

        match c {
            'a'..='z' => LETTERS[(c as u8 - b'a') as usize],
            'A'..='Z' => LETTERS[(c as u8 - b'A') as usize],
            '0'..='9' => DIGITS[(c as u8 - b'0') as usize],
            ' ' => Space,
            '\n' | '\r' => Enter,
            '\t' => Tab,
            '\u{1b}' => Escape,
            '\u{7f}' | '\u{8}' => Backspace,
            _ => Unidentified,
        }
    }
}

//=== InputEvent ==========================================================

/// Low-level keyboard event.
///
/// # Equality & Hashing Semantics
///
/// Events are compared by type + payload (key + modifiers).
///
/// ```text
/// KeyDown{A, CTRL} == KeyDown{A, CTRL}       ✓
/// KeyDown{A, CTRL} == KeyDown{A, SHIFT}      ✗ (different mods)
/// KeyDown{A}       == KeyUp{A}               ✗ (different type)
/// ```
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Key released.
    ///
    /// Many terminals never report releases; pollers synthesize one on
    /// the following tick in that case.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Unrecognized or unsupported event. Ignored by the tracker.
    Unidentified
}

//--- Implementation ------------------------------------------------------

impl InputEvent {
    /// Shorthand for a key press without modifiers.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown { key, modifiers: Modifiers::NONE }
    }

    /// Shorthand for a key release without modifiers.
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp { key, modifiers: Modifiers::NONE }
    }

    /// Returns a new event with updated modifiers (consumes self).
    ///
    /// Has no effect on `Unidentified`.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        match &mut self {
            Self::KeyDown { modifiers: m, .. } | Self::KeyUp { modifiers: m, .. } => {
                *m = modifiers;
            }
            Self::Unidentified => {}
        }
        self
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        if let Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } = self {
            key.hash(state);
            modifiers.hash(state);
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_respects_modifiers() {
        let plain = InputEvent::key_down(KeyCode::KeyS);
        let ctrl = plain.with_modifiers(Modifiers::CTRL);

        assert_eq!(plain, InputEvent::key_down(KeyCode::KeyS));
        assert_ne!(plain, ctrl);
        assert_ne!(plain, InputEvent::key_up(KeyCode::KeyS));
    }

    #[test]
    fn equal_events_hash_equal() {
        let a = InputEvent::key_down(KeyCode::Escape);
        let b = InputEvent::key_down(KeyCode::Escape);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&InputEvent::key_up(KeyCode::Escape)));
    }

    #[test]
    fn with_modifiers_ignores_unidentified() {
        assert_eq!(
            InputEvent::Unidentified.with_modifiers(Modifiers::ALT),
            InputEvent::Unidentified
        );
    }

    #[test]
    fn from_char_maps_letters_digits_and_controls() {
        assert_eq!(KeyCode::from_char('p'), KeyCode::KeyP);
        assert_eq!(KeyCode::from_char('P'), KeyCode::KeyP);
        assert_eq!(KeyCode::from_char('7'), KeyCode::Digit7);
        assert_eq!(KeyCode::from_char('\u{1b}'), KeyCode::Escape);
        assert_eq!(KeyCode::from_char(' '), KeyCode::Space);
        assert_eq!(KeyCode::from_char('~'), KeyCode::Unidentified);
    }

    #[test]
    fn key_code_serializes_by_variant_name() {
        let json = serde_json::to_string(&KeyCode::ArrowUp).unwrap();
        assert_eq!(json, "\"ArrowUp\"");
        let key: KeyCode = serde_json::from_str("\"KeyQ\"").unwrap();
        assert_eq!(key, KeyCode::KeyQ);
    }
}
