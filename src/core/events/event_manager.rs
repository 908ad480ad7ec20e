//=========================================================================
// Event Manager
//=========================================================================
//
// Typed publish/subscribe hub with per-type event queues.
//
// Architecture:
//   dispatch<E>() ──→ listeners of E (synchronous, subscription order)
//                 └─→ HashMap<TypeId, TypedQueue<E>>
//                              ↓
//   Multiple consumers ← read<E>() (shared)
//                              ↓
//   Game loop ──────────→ clear_all() at tick boundary
//
// Listeners run while the manager is mutably borrowed; a listener must
// not dispatch through the same manager.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

use log::trace;

//=== Internal Dependencies ===============================================

use super::event_queue::{EventQueue, TypedQueue};
use super::{Event, ListenerId};

//=== EventManager ========================================================

/// Typed event dispatcher.
pub struct EventManager {
    queues: HashMap<TypeId, Box<dyn EventQueue>>,
    next_listener_id: u64,
}

impl EventManager {
    /// Creates an event manager with no listeners and empty queues.
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
            next_listener_id: 0,
        }
    }

    fn queue_mut<E: Event>(&mut self) -> &mut TypedQueue<E> {
        let boxed = self
            .queues
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(TypedQueue::<E>::new()));

        match boxed.as_any_mut().downcast_mut::<TypedQueue<E>>() {
            Some(queue) => queue,
            // Entries are keyed by TypeId::of::<E>, so the downcast cannot fail.
            None => unreachable!("event queue stored under the wrong TypeId"),
        }
    }

    fn queue<E: Event>(&self) -> Option<&TypedQueue<E>> {
        self.queues
            .get(&TypeId::of::<E>())
            .and_then(|q| q.as_any().downcast_ref::<TypedQueue<E>>())
    }

    //--- Publish / Subscribe ----------------------------------------------

    /// Publishes an event.
    ///
    /// Every listener subscribed to `E` is invoked synchronously, in
    /// subscription order, before the event is queued for readers.
    pub fn dispatch<E: Event>(&mut self, event: E) {
        let queue = self.queue_mut::<E>();

        trace!(
            "Dispatching {} to {} listener(s)",
            std::any::type_name::<E>(),
            queue.listeners.entries.len()
        );

        for (_, listener) in queue.listeners.entries.iter_mut() {
            listener(&event);
        }

        queue.events.push(event);
    }

    /// Subscribes a listener to events of type `E`.
    pub fn subscribe<E, F>(&mut self, listener: F) -> ListenerId
    where
        E: Event,
        F: FnMut(&E) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;

        self.queue_mut::<E>()
            .listeners
            .entries
            .push((id, Box::new(listener)));

        id
    }

    /// Removes a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.queues
            .values_mut()
            .any(|queue| queue.remove_listener(id))
    }

    //--- Query API --------------------------------------------------------

    /// Returns every event of type `E` dispatched since the last clear.
    pub fn read<E: Event>(&self) -> &[E] {
        self.queue::<E>()
            .map(|q| q.events.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the number of queued events of type `E`.
    pub fn count<E: Event>(&self) -> usize {
        self.queue::<E>().map(|q| q.events.len()).unwrap_or(0)
    }

    /// Returns the number of listeners subscribed to `E`.
    pub fn listener_count<E: Event>(&self) -> usize {
        self.queue::<E>()
            .map(|q| q.listeners.entries.len())
            .unwrap_or(0)
    }

    /// Clears queued events of type `E`, keeping listeners.
    pub fn clear<E: Event>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<E>()) {
            queue.clear_queue();
        }
    }

    /// Clears every queue, keeping listeners and allocations.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
