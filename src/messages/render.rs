//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::{HEADING, INITIAL_COUNT};
use crate::messages::ui_events::CounterSlot;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub heading: String,

    /// The one shared value both counters display
    pub count: i64,
    /// Amount each activation adds
    pub step: i64,

    // UI state
    pub focused: CounterSlot,
    pub show_help: bool,

    /// Bumped on every applied update
    pub revision: u64,
    /// Bumped on every mount
    pub generation: u64,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            heading: String::from(HEADING),
            count: INITIAL_COUNT,
            step: 1,
            focused: CounterSlot::First,
            show_help: false,
            revision: 0,
            generation: 1,
        }
    }
}
