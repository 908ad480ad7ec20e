//=========================================================================
// Scene Errors
//=========================================================================
//
// Error taxonomy for scene management.
//
//   NotFound           → identifier unmatched in the scene registry
//   Management/...     → malformed scene document or hierarchy item
//   IncorrectComponent → component declared a capability it can't provide
//   Io / Parse         → scene document could not be read or decoded
//
// Soft problems (missing item `type`, unknown component property) are not
// errors; they are logged with `warn!` and skipped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

//=== SceneId =============================================================

/// Identifies a registered scene either by registration index or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Zero-based position in the registry.
    Index(usize),

    /// Scene name; the first registered scene with this name matches.
    Name(String),
}

impl From<usize> for SceneId {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for SceneId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SceneId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for SceneId {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Name(name) => f.write_str(name),
        }
    }
}

//=== SceneError ==========================================================

/// Errors raised while registering, loading, or building scenes.
#[derive(Debug, Error)]
pub enum SceneError {
    /// No registered scene matches the requested identifier.
    #[error("Scene not found: {0}")]
    NotFound(SceneId),

    /// A scene document or hierarchy item is malformed.
    #[error("Scene management error: {0}")]
    Management(String),

    /// A component declared a capability but could not provide it.
    #[error("Incorrect component type: expected {expected}, found {found}")]
    IncorrectComponentType {
        expected: &'static str,
        found: String,
    },

    /// No component factory is registered for this class identifier.
    #[error("Unknown component class: {0}")]
    UnknownComponent(String),

    /// A hierarchy item names a type that no factory can build.
    #[error("Unsupported scene item type: {0}")]
    UnsupportedItemType(String),

    /// A `text` value was given for a UI element without text content.
    #[error("Unsupported text assignment on UI element: {0}")]
    UnsupportedText(String),

    /// The scene document could not be read.
    #[error("Failed to read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scene document is not valid JSON.
    #[error("Failed to parse scene file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SceneError {
    /// Shorthand for [`SceneError::Management`].
    pub fn management(message: impl Into<String>) -> Self {
        Self::Management(message.into())
    }

    /// Returns true for the recoverable not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_id_conversions() {
        assert_eq!(SceneId::from(2), SceneId::Index(2));
        assert_eq!(SceneId::from("Level 1"), SceneId::Name("Level 1".to_string()));
        assert_eq!(SceneId::from(String::from("a")), SceneId::Name("a".to_string()));
    }

    #[test]
    fn not_found_message_carries_identifier() {
        let err = SceneError::NotFound(SceneId::from("Missing"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Scene not found: Missing");

        let err = SceneError::NotFound(SceneId::from(7));
        assert_eq!(err.to_string(), "Scene not found: 7");
    }

    #[test]
    fn management_error_is_not_not_found() {
        let err = SceneError::management("Invalid sprite texture path");
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("Invalid sprite texture path"));
    }
}
