//! App layer - owner of the shared count
//!
//! The App actor receives UI events (including values requested through a
//! Counter's setter), updates state, and emits render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::AppState;
pub use actor::AppActor;
