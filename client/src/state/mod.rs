//! Client state shared between the container, pages, and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `portal` owns session and view signals, `ui` defines banner/modal values,
//! and `organization` derives the dashboard card from backend data.

pub mod organization;
pub mod portal;
pub mod ui;
