//! Command handlers - logic for processing UI events

use crate::app::AppState;
use crate::messages::CounterSlot;

impl AppState {
    // ========================
    // Shared count
    // ========================

    /// Apply a value requested through the setter. Requests from a setter
    /// handed out by an earlier mount are dropped. Returns true if applied.
    pub fn set_count(&mut self, value: i64, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(value, generation, current = self.generation, "Dropped update from previous mount");
            return false;
        }

        let previous = self.count();
        if self.count.set(value) {
            self.revision += 1;
            tracing::info!(previous, count = value, revision = self.revision, "Count updated");
        }
        true
    }

    // ========================
    // Focus
    // ========================

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn focus(&mut self, slot: CounterSlot) {
        self.focused = slot;
    }

    // ========================
    // Lifecycle
    // ========================

    /// Unmount and mount again; the count starts over
    pub fn remount(&mut self) {
        tracing::info!(generation = self.generation, count = self.count(), "App unmounted");
        self.count.reset();
        self.focused = CounterSlot::First;
        self.show_help = false;
        self.generation += 1;
        self.revision += 1;
        tracing::info!(generation = self.generation, count = self.count(), "App mounted");
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
