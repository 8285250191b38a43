//! # lifted-counter
//!
//! Two terminal counters sharing one piece of state.
//!
//! The App component owns the count. Each Counter receives the current value
//! and a setter; pressing either one asks App to store `count + step`, and
//! both are redrawn from the same snapshot.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - draws snapshots, runs Counter activations
//! - App Layer - single owner of the count, publishes snapshots

pub mod app;
pub mod config;
pub mod constants;
pub mod counter;
pub mod event_loop;
pub mod hooks;
pub mod messages;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use counter::{Counter, CounterProps};
pub use event_loop::{LoopControl, UiLoop};
pub use hooks::{use_state, SetCount, SetState, StateCell};
pub use messages::{CounterSlot, KeyAction, RenderState, UiEvent};
