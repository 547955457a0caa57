//! Networking modules for the onboarding REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and
//! `outcome` turns call results into user-facing feedback.

pub mod api;
pub mod error;
pub mod outcome;
pub mod types;
