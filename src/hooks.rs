//! State hook primitives
//!
//! `StateCell` is a value with a single owner. `SetState` is the handle the
//! owner hands to children so they can request a new value without touching
//! the cell directly. Requests travel over the owner's event channel and are
//! applied on its next update.

use std::fmt;

use tokio::sync::mpsc;

use crate::messages::UiEvent;

/// A single named unit of mutable state owned by one component
#[derive(Debug, Clone)]
pub struct StateCell<T> {
    value: T,
    initial: T,
}

/// Create a state cell holding `initial`
pub fn use_state<T: Clone>(initial: T) -> StateCell<T> {
    StateCell {
        value: initial.clone(),
        initial,
    }
}

impl<T: Clone + PartialEq> StateCell<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store a new value, returns true if it differs from the old one
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Return to the value the cell was created with
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
    }
}

/// Setter handle passed down to children
///
/// A setter belongs to one mount of its owner. Every request carries that
/// mount's generation, and the owner drops requests from an earlier mount.
/// Cloning is cheap; every clone feeds the same owner.
pub struct SetState<T> {
    tx: mpsc::UnboundedSender<UiEvent>,
    wrap: fn(T, u64) -> UiEvent,
    generation: u64,
}

impl<T> SetState<T> {
    pub fn new(tx: mpsc::UnboundedSender<UiEvent>, wrap: fn(T, u64) -> UiEvent) -> Self {
        SetState {
            tx,
            wrap,
            generation: 1,
        }
    }

    /// The same setter, bound to another mount of the owner
    pub fn for_generation(&self, generation: u64) -> Self {
        SetState {
            tx: self.tx.clone(),
            wrap: self.wrap,
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Request that the owner store `value`. Never blocks. Returns false if
    /// the owner has gone away, in which case nothing happens.
    pub fn set(&self, value: T) -> bool {
        if self.tx.send((self.wrap)(value, self.generation)).is_err() {
            tracing::debug!(generation = self.generation, "setter called after owner unmounted");
            return false;
        }
        true
    }

    /// Whether the owner is still listening
    pub fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }
}

impl<T> Clone for SetState<T> {
    fn clone(&self) -> Self {
        self.for_generation(self.generation)
    }
}

impl<T> fmt::Debug for SetState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetState")
            .field("generation", &self.generation)
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// The setter App hands to each Counter
pub type SetCount = SetState<i64>;

impl SetCount {
    pub fn for_count(tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        SetState::new(tx, |value, generation| UiEvent::SetCount { value, generation })
    }
}
