//=========================================================================
// Event Queue Trait
//=========================================================================
//
// Type-erased storage for per-event-type queues and listener lists, so
// the event manager can keep them in one HashMap keyed by TypeId.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::{Event, ListenerId};

//=== Listener Storage ====================================================

/// Boxed listener callback for events of type `E`.
pub(super) type Listener<E> = Box<dyn FnMut(&E)>;

/// Subscribers for one event type, in subscription order.
pub(super) struct ListenerList<E: Event> {
    pub(super) entries: Vec<(ListenerId, Listener<E>)>,
}

impl<E: Event> ListenerList<E> {
    pub(super) fn new() -> Self {
        Self { entries: Vec::new() }
    }
}

//=== EventQueue ==========================================================

/// Type-erased operations shared by every event queue.
pub(super) trait EventQueue {
    /// Clears all events while preserving allocated capacity.
    fn clear_queue(&mut self);

    /// Removes the listener with `id`, returning true if it was present.
    fn remove_listener(&mut self, id: ListenerId) -> bool;

    fn len(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Queued events and subscribers for a single event type.
pub(super) struct TypedQueue<E: Event> {
    pub(super) events: Vec<E>,
    pub(super) listeners: ListenerList<E>,
}

impl<E: Event> TypedQueue<E> {
    pub(super) fn new() -> Self {
        Self {
            events: Vec::new(),
            listeners: ListenerList::new(),
        }
    }
}

impl<E: Event> EventQueue for TypedQueue<E> {
    fn clear_queue(&mut self) {
        self.events.clear();
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.entries.len();
        self.listeners.entries.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.entries.len() != before
    }

    fn len(&self) -> usize {
        self.events.len()
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
