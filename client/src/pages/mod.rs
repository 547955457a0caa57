//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Every page except `home` renders inside the default
//! container and reads its context.

pub mod dashboard;
pub mod home;
pub mod profile;
pub mod registration;
pub mod spid_login;
