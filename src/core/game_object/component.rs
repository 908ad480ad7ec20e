//=========================================================================
// Components
//=========================================================================
//
// Behaviour attached to game objects.
//
// Components are built by class identifier through the object registry
// and configured by name with loosely-typed properties taken from scene
// documents. Capabilities (e.g. collider) are queried explicitly rather
// than discovered by downcasting.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use bitflags::bitflags;
use serde_json::Value;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::math::Vector2;
use crate::core::metadata::Vector2Metadata;
use crate::core::physics::Collider;

//=== Capabilities ========================================================

bitflags! {
    /// Capabilities a component declares to the engine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComponentCapabilities: u32 {
        /// Provides a collider through [`Component::as_collider`].
        const COLLIDER = 1 << 0;
    }
}

//=== PropertyError =======================================================

/// Reasons a property could not be applied to a component.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("unknown property '{0}'")]
    Unknown(String),

    #[error("invalid value for property '{property}': {reason}")]
    InvalidValue { property: String, reason: String },
}

impl PropertyError {
    pub fn invalid(property: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.to_string(),
            reason: reason.into(),
        }
    }
}

//=== Component Trait =====================================================

/// Behaviour attached to a [`GameObject`](super::GameObject).
pub trait Component: Any {
    /// Class identifier used in scene documents and error messages.
    fn type_name(&self) -> &'static str;

    fn start(&mut self) {}

    fn update(&mut self) {}

    /// Called once per tick before `update`, from the physics phase.
    fn fixed_update(&mut self) {}

    fn stop(&mut self) {}

    fn render(&self) {}

    fn erase(&self) {}

    /// Capabilities this component claims to provide.
    fn capabilities(&self) -> ComponentCapabilities {
        ComponentCapabilities::empty()
    }

    /// Collider provided by this component, owned by `owner`.
    fn as_collider(&self, _owner: &str) -> Option<Collider> {
        None
    }

    /// Applies a named property from a scene document.
    fn set_property(&mut self, name: &str, _value: &Value) -> Result<(), PropertyError> {
        Err(PropertyError::Unknown(name.to_string()))
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

//=== BoxCollider =========================================================

/// Rectangular collider component.
///
/// Properties: `offset` and `size` (`{x, y}`), `isTrigger` (bool).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxCollider {
    pub offset: Vector2,
    pub size: Vector2,
    pub is_trigger: bool,
}

impl BoxCollider {
    pub const TYPE_NAME: &'static str = "BoxCollider";

    pub fn new(size: Vector2) -> Self {
        Self {
            offset: Vector2::ZERO,
            size,
            is_trigger: false,
        }
    }
}

impl Default for BoxCollider {
    fn default() -> Self {
        Self::new(Vector2::ONE)
    }
}

fn vector_property(name: &str, value: &Value) -> Result<Vector2, PropertyError> {
    Vector2Metadata::from_value(value)
        .map(Vector2::from)
        .map_err(|e| PropertyError::invalid(name, e.to_string()))
}

impl Component for BoxCollider {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn capabilities(&self) -> ComponentCapabilities {
        ComponentCapabilities::COLLIDER
    }

    fn as_collider(&self, owner: &str) -> Option<Collider> {
        Some(Collider {
            owner: owner.to_string(),
            offset: self.offset,
            size: self.size,
            is_trigger: self.is_trigger,
        })
    }

    fn set_property(&mut self, name: &str, value: &Value) -> Result<(), PropertyError> {
        match name {
            "offset" => self.offset = vector_property(name, value)?,
            "size" => self.size = vector_property(name, value)?,
            "isTrigger" => {
                self.is_trigger = value
                    .as_bool()
                    .ok_or_else(|| PropertyError::invalid(name, "expected a boolean"))?;
            }
            _ => return Err(PropertyError::Unknown(name.to_string())),
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================
