//=========================================================================
// UI Elements
//=========================================================================
//
// Widgets placed in a scene next to its game objects.
//
// Only construction, positioning and text content are part of the scene
// core; widget layout and drawing belong to the console renderer.
//
//=========================================================================

//=== Module Declarations =================================================

mod modal;
mod ui_manager;
mod widgets;

//=== Public API ==========================================================

pub use modal::{Modal, ModalManager};
pub use ui_manager::UiManager;
pub use widgets::{Label, Text};

//=== Internal Dependencies ===============================================

use crate::core::math::Vector2;

//=== UiElementArgs =======================================================

/// Constructor arguments shared by every widget factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiElementArgs {
    /// Name of the scene that owns the widget.
    pub scene: String,
    pub name: String,
    pub position: Vector2,
    pub size: Vector2,
}

//=== TextContent =========================================================

/// Widgets whose content is a piece of text.
pub trait TextContent {
    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);
}

//=== UiElement ===========================================================

/// A widget owned by a scene or by the [`UiManager`].
pub trait UiElement {
    /// Widget kind, matching the `type` used in scene documents.
    fn type_name(&self) -> &'static str;

    fn name(&self) -> &str;

    fn position(&self) -> Vector2;

    fn set_position(&mut self, position: Vector2);

    fn size(&self) -> Vector2;

    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn update(&mut self) {}

    fn render(&self) {}

    fn render_at(&self, _x: Option<i32>, _y: Option<i32>) {}

    fn erase(&self) {}

    fn erase_at(&self, _x: Option<i32>, _y: Option<i32>) {}

    /// Text capability, `None` for widgets without text content.
    fn as_text_mut(&mut self) -> Option<&mut dyn TextContent> {
        None
    }

    /// Read-only text capability.
    fn as_text(&self) -> Option<&dyn TextContent> {
        None
    }
}
