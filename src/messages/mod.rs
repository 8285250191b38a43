//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines the messages that flow between the UI and App layers.

pub mod ui_events;
pub mod render;

pub use ui_events::{CounterSlot, KeyAction, UiEvent};
pub use render::RenderState;
