//=========================================================================
// Notifications
//=========================================================================
//
// Short-lived toasts. Each notification lives for a number of ticks and
// is dropped once its time runs out.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Notification ========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub text: String,
    /// Remaining lifetime in ticks.
    pub ttl: u32,
}

//=== NotificationsManager ================================================

/// Queue of active notifications, oldest first.
#[derive(Debug, Default)]
pub struct NotificationsManager {
    active: Vec<Notification>,
}

impl NotificationsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a notification shown for `ttl` ticks. A zero ttl is ignored.
    pub fn notify(&mut self, title: impl Into<String>, text: impl Into<String>, ttl: u32) {
        if ttl == 0 {
            return;
        }
        let notification = Notification {
            title: title.into(),
            text: text.into(),
            ttl,
        };
        debug!("Notification: {}", notification.title);
        self.active.push(notification);
    }

    /// Ages every notification by one tick and drops expired ones.
    pub fn update(&mut self) {
        for notification in &mut self.active {
            notification.ttl -= 1;
        }
        self.active.retain(|n| n.ttl > 0);
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

//=========================================================================
// Tests
//=========================================================================
