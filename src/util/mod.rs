//! Utility helpers shared across the shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (task spawning,
//! console logging) from the router and session logic.

pub mod logging;
pub mod task;
