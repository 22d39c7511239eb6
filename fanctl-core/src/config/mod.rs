//! Configuration types
//!
//! Board-agnostic configuration: the fan curve and where the fan is wired.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
