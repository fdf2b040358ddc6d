//! Event Dispatch - Single-slot callback registry for entry events.
//!
//! Three named slots, each holding at most one handler:
//!
//! - `LengthExceeded` - a text change hit the max-length clamp
//! - `BeginEdit` - the entry gained focus
//! - `EndEdit` - the entry lost focus
//!
//! Registering a handler for a slot replaces the previous one (re-registering
//! is allowed and simply overwrites). Dispatch is synchronous and
//! fire-and-forget: the handler receives a snapshot of the entry state taken
//! at the moment of the event, returns nothing, and an empty slot is a no-op.
//!
//! # Example
//!
//! ```ignore
//! use entrybox::events::{EventSlot, EventSlots};
//! use std::rc::Rc;
//!
//! let slots = EventSlots::default();
//! slots.register(EventSlot::BeginEdit, Rc::new(|state| {
//!     println!("editing: {}", state.text);
//! }));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::entry::EntryState;

// =============================================================================
// Callback Type
// =============================================================================

/// Entry event callback (Rc for shared ownership in closures).
///
/// Receives the entry state snapshot taken when the event fired.
pub type EntryCallback = Rc<dyn Fn(&EntryState)>;

// =============================================================================
// Event Slots
// =============================================================================

/// The named callback slots an entry exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSlot {
    /// A text change exceeded the configured max length and was clamped.
    LengthExceeded,
    /// The entry gained focus.
    BeginEdit,
    /// The entry lost focus.
    EndEdit,
}

/// Single-subscriber callback storage, one slot per event kind.
#[derive(Default)]
pub struct EventSlots {
    length_exceeded: RefCell<Option<EntryCallback>>,
    begin_edit: RefCell<Option<EntryCallback>>,
    end_edit: RefCell<Option<EntryCallback>>,
}

impl EventSlots {
    fn cell(&self, slot: EventSlot) -> &RefCell<Option<EntryCallback>> {
        match slot {
            EventSlot::LengthExceeded => &self.length_exceeded,
            EventSlot::BeginEdit => &self.begin_edit,
            EventSlot::EndEdit => &self.end_edit,
        }
    }

    /// Register a callback for `slot`, replacing any previous handler.
    pub fn register(&self, slot: EventSlot, callback: EntryCallback) {
        *self.cell(slot).borrow_mut() = Some(callback);
    }

    /// Remove the handler for `slot`, if any.
    pub fn clear(&self, slot: EventSlot) {
        *self.cell(slot).borrow_mut() = None;
    }

    /// Check whether `slot` currently has a handler.
    pub fn is_registered(&self, slot: EventSlot) -> bool {
        self.cell(slot).borrow().is_some()
    }

    /// Invoke the handler for `slot` with the given state snapshot.
    ///
    /// No-op when the slot is empty. The handler is cloned out before the
    /// call so it may re-register (or clear) its own slot.
    pub fn dispatch(&self, slot: EventSlot, state: &EntryState) {
        let callback = self.cell(slot).borrow().clone();
        if let Some(callback) = callback {
            callback(state);
        }
    }
}

impl std::fmt::Debug for EventSlots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSlots")
            .field("length_exceeded", &self.is_registered(EventSlot::LengthExceeded))
            .field("begin_edit", &self.is_registered(EventSlot::BeginEdit))
            .field("end_edit", &self.is_registered(EventSlot::EndEdit))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_empty_slot_is_noop() {
        let slots = EventSlots::default();
        // Must not panic or do anything observable.
        slots.dispatch(EventSlot::BeginEdit, &EntryState::default());
        assert!(!slots.is_registered(EventSlot::BeginEdit));
    }

    #[test]
    fn test_dispatch_fires_registered_callback() {
        let slots = EventSlots::default();
        let fired = Rc::new(Cell::new(0));

        let fired_in_cb = fired.clone();
        slots.register(
            EventSlot::EndEdit,
            Rc::new(move |_| fired_in_cb.set(fired_in_cb.get() + 1)),
        );

        slots.dispatch(EventSlot::EndEdit, &EntryState::default());
        slots.dispatch(EventSlot::EndEdit, &EntryState::default());
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_register_replaces_previous_handler() {
        let slots = EventSlots::default();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let first_in_cb = first.clone();
        slots.register(
            EventSlot::LengthExceeded,
            Rc::new(move |_| first_in_cb.set(first_in_cb.get() + 1)),
        );
        let second_in_cb = second.clone();
        slots.register(
            EventSlot::LengthExceeded,
            Rc::new(move |_| second_in_cb.set(second_in_cb.get() + 1)),
        );

        slots.dispatch(EventSlot::LengthExceeded, &EntryState::default());
        assert_eq!(first.get(), 0, "replaced handler must not fire");
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_slots_are_independent() {
        let slots = EventSlots::default();
        let begin_fired = Rc::new(Cell::new(false));

        let begin_in_cb = begin_fired.clone();
        slots.register(EventSlot::BeginEdit, Rc::new(move |_| begin_in_cb.set(true)));

        slots.dispatch(EventSlot::EndEdit, &EntryState::default());
        assert!(!begin_fired.get());
        slots.dispatch(EventSlot::BeginEdit, &EntryState::default());
        assert!(begin_fired.get());
    }

    #[test]
    fn test_callback_sees_state_snapshot() {
        let slots = EventSlots::default();
        let seen = Rc::new(RefCell::new(String::new()));

        let seen_in_cb = seen.clone();
        slots.register(
            EventSlot::LengthExceeded,
            Rc::new(move |state| *seen_in_cb.borrow_mut() = state.text.clone()),
        );

        let state = EntryState {
            text: "abcde".to_string(),
            ..EntryState::default()
        };
        slots.dispatch(EventSlot::LengthExceeded, &state);
        assert_eq!(*seen.borrow(), "abcde");
    }

    #[test]
    fn test_clear_empties_slot() {
        let slots = EventSlots::default();
        slots.register(EventSlot::BeginEdit, Rc::new(|_| {}));
        assert!(slots.is_registered(EventSlot::BeginEdit));
        slots.clear(EventSlot::BeginEdit);
        assert!(!slots.is_registered(EventSlot::BeginEdit));
    }
}
