//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and dashboard widgets while reading shared
//! state from the [`PortalHandles`](crate::state::portal::PortalHandles) context.

pub mod add_mail_modal;
pub mod app_alert;
pub mod central_header;
pub mod default_container;
pub mod home_login_button;
pub mod loading_page;
pub mod logout_modal;
pub mod organization_card;
pub mod slim_header;
