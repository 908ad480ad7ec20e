//=========================================================================
// Text Widgets
//=========================================================================
//
// `Label`: single line of text, truncated to its width.
// `Text`:  multi-line block; its height follows the number of lines.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{TextContent, UiElement, UiElementArgs};
use crate::core::math::Vector2;

//=== Label ===============================================================

/// Single-line text widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    scene: String,
    name: String,
    position: Vector2,
    size: Vector2,
    text: String,
}

impl Label {
    pub const TYPE_NAME: &'static str = "Label";

    pub fn new(args: UiElementArgs) -> Self {
        Self {
            scene: args.scene,
            name: args.name,
            position: args.position,
            size: args.size,
            text: String::new(),
        }
    }

    /// Name of the owning scene.
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Text as displayed: first line only, cut to the label width.
    pub fn display_text(&self) -> String {
        let width = usize::try_from(self.size.x).unwrap_or(0);
        let line = self.text.lines().next().unwrap_or("");
        if width == 0 {
            line.to_string()
        } else {
            line.chars().take(width).collect()
        }
    }
}

impl TextContent for Label {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl UiElement for Label {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Vector2 {
        self.position
    }

    fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    fn size(&self) -> Vector2 {
        self.size
    }

    fn as_text_mut(&mut self) -> Option<&mut dyn TextContent> {
        Some(self)
    }

    fn as_text(&self) -> Option<&dyn TextContent> {
        Some(self)
    }
}

//=== Text ================================================================

/// Multi-line text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    scene: String,
    name: String,
    position: Vector2,
    size: Vector2,
    text: String,
}

impl Text {
    pub const TYPE_NAME: &'static str = "Text";

    pub fn new(args: UiElementArgs) -> Self {
        Self {
            scene: args.scene,
            name: args.name,
            position: args.position,
            size: args.size,
            text: String::new(),
        }
    }

    pub fn scene(&self) -> &str {
        &self.scene
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }
}

impl TextContent for Text {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();

        let lines = i32::try_from(self.text.lines().count()).unwrap_or(i32::MAX);
        let widest = self
            .text
            .lines()
            .map(|line| i32::try_from(line.chars().count()).unwrap_or(i32::MAX))
            .max()
            .unwrap_or(0);
        self.size = Vector2::new(self.size.x.max(widest), lines);
    }
}

impl UiElement for Text {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Vector2 {
        self.position
    }

    fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    fn size(&self) -> Vector2 {
        self.size
    }

    fn as_text_mut(&mut self) -> Option<&mut dyn TextContent> {
        Some(self)
    }

    fn as_text(&self) -> Option<&dyn TextContent> {
        Some(self)
    }
}

//=========================================================================
// Tests
//=========================================================================
