//! App state - pure data structure with no I/O logic

use crate::constants::{HEADING, INITIAL_COUNT};
use crate::hooks::{use_state, StateCell};
use crate::messages::{CounterSlot, RenderState};

/// State owned by the App component
///
/// `count` is the only piece of shared data. Everything else is UI
/// bookkeeping that never reaches the counters.
#[derive(Debug)]
pub struct AppState {
    pub count: StateCell<i64>,
    pub step: i64,

    // UI state
    pub focused: CounterSlot,
    pub show_help: bool,

    pub revision: u64,
    pub generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl AppState {
    /// Mount App with a fresh count
    pub fn new(step: i64) -> Self {
        AppState {
            count: use_state(INITIAL_COUNT),
            step,
            focused: CounterSlot::First,
            show_help: false,
            revision: 0,
            generation: 1,
        }
    }

    pub fn count(&self) -> i64 {
        *self.count.get()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            heading: String::from(HEADING),
            count: self.count(),
            step: self.step,
            focused: self.focused,
            show_help: self.show_help,
            revision: self.revision,
            generation: self.generation,
        }
    }
}
