//=========================================================================
// Modal Manager
//=========================================================================
//
// Stack of blocking dialogs. The topmost modal is the one shown.
//
//=========================================================================

use log::debug;

/// A blocking dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

/// Stack of open modals.
#[derive(Debug, Default)]
pub struct ModalManager {
    stack: Vec<Modal>,
}

impl ModalManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let modal = Modal {
            title: title.into(),
            message: message.into(),
        };
        debug!("Showing modal '{}'", modal.title);
        self.stack.push(modal);
    }

    /// Closes the topmost modal.
    pub fn dismiss(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn is_showing(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }
}
