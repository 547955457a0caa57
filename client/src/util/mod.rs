//! Utility helpers shared across portal UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod cookie;
pub mod env;
pub mod guards;
pub mod liveness;
pub mod messages;
