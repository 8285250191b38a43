//! Application constants
//!
//! Centralized location for fixed strings and startup values.

/// Heading rendered above the two counters
pub const HEADING: &str = "useState and Lifting State Up";

/// Value the shared count takes every time App mounts
pub const INITIAL_COUNT: i64 = 0;

/// Number of Counter instances App renders
pub const COUNTER_INSTANCES: usize = 2;

/// Application name
pub const APP_NAME: &str = "lifted-counter";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
