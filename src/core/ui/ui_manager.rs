//=========================================================================
// UI Manager
//=========================================================================
//
// Owns overlay widgets that live above every scene (HUD, debug text).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::UiElement;

//=== UiManager ===========================================================

/// Scene-independent overlay widgets.
#[derive(Default)]
pub struct UiManager {
    elements: Vec<Box<dyn UiElement>>,
}

impl UiManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Box<dyn UiElement>) {
        debug!("Adding overlay element {}", element.name());
        self.elements.push(element);
    }

    /// Removes every element named `name`. Returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| e.name() != name);
        before - self.elements.len()
    }

    pub fn find(&self, name: &str) -> Option<&dyn UiElement> {
        self.elements
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Box<dyn UiElement>> {
        self.elements.iter_mut().find(|e| e.name() == name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn update(&mut self) {
        for element in &mut self.elements {
            element.update();
        }
    }

    pub fn render(&self) {
        for element in &self.elements {
            element.render();
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vector2;
    use crate::core::ui::{Label, TextContent, UiElementArgs};

    fn label(name: &str) -> Box<dyn UiElement> {
        Box::new(Label::new(UiElementArgs {
            scene: String::new(),
            name: name.to_string(),
            position: Vector2::ZERO,
            size: Vector2::new(10, 1),
        }))
    }

    #[test]
    fn add_find_and_remove() {
        let mut ui = UiManager::new();
        ui.add(label("fps"));
        ui.add(label("score"));

        assert_eq!(ui.len(), 2);
        assert!(ui.find("fps").is_some());

        ui.find_mut("score")
            .and_then(|e| e.as_text_mut())
            .unwrap()
            .set_text("42");
        assert_eq!(ui.find("score").and_then(|e| e.as_text()).unwrap().text(), "42");

        assert_eq!(ui.remove("fps"), 1);
        assert_eq!(ui.remove("fps"), 0);
        assert_eq!(ui.len(), 1);
    }
}
