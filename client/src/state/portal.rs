//! Session and view state owned by the default container.
//!
//! DESIGN
//! ======
//! The container creates every signal and keeps the write halves in
//! [`PortalWriters`]. Descendants receive [`PortalHandles`]: read halves plus a
//! fixed set of actions, so no subtree can write state arbitrarily.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use leptos::prelude::*;

use super::ui::{AlertState, LogoutModalState};
use crate::net::types::UserProfile;

/// Write halves, held only by the owning container.
#[derive(Clone, Copy)]
pub struct PortalWriters {
    pub profile: WriteSignal<UserProfile>,
    pub loading_page: WriteSignal<bool>,
    pub alert: WriteSignal<AlertState>,
    pub logout_modal: WriteSignal<LogoutModalState>,
    pub add_mail_modal: WriteSignal<bool>,
}

/// Narrow mutations exposed to descendants.
#[derive(Clone, Copy)]
pub struct PortalActions {
    pub show_alert: Callback<AlertState>,
    pub dismiss_alert: Callback<()>,
    pub show_logout_modal: Callback<LogoutModalState>,
    pub hide_logout_modal: Callback<()>,
    pub toggle_add_mail_modal: Callback<()>,
    pub set_work_email: Callback<String>,
}

/// Read-only view of the portal state, provided as context.
#[derive(Clone, Copy)]
pub struct PortalHandles {
    /// Session token read from the cookie at container setup.
    pub token: ReadSignal<String>,
    pub profile: ReadSignal<UserProfile>,
    pub loading_page: ReadSignal<bool>,
    pub alert: ReadSignal<AlertState>,
    pub logout_modal: ReadSignal<LogoutModalState>,
    pub add_mail_modal: ReadSignal<bool>,
    pub actions: PortalActions,
}

/// Create the portal state with `token` already committed.
///
/// The token has no writer: the cookie stays the source of truth.
pub fn create_portal_state(token: String) -> (PortalHandles, PortalWriters) {
    let (token, _) = signal(token);
    let (profile, set_profile) = signal(UserProfile::default());
    let (loading_page, set_loading_page) = signal(false);
    let (alert, set_alert) = signal(AlertState::default());
    let (logout_modal, set_logout_modal) = signal(LogoutModalState::default());
    let (add_mail_modal, set_add_mail_modal) = signal(false);

    let actions = PortalActions {
        show_alert: Callback::new(move |next: AlertState| set_alert.set(next)),
        dismiss_alert: Callback::new(move |()| set_alert.update(|a| a.visible = false)),
        show_logout_modal: Callback::new(move |next: LogoutModalState| set_logout_modal.set(next)),
        hide_logout_modal: Callback::new(move |()| set_logout_modal.set(LogoutModalState::default())),
        toggle_add_mail_modal: Callback::new(move |()| set_add_mail_modal.update(|v| *v = !*v)),
        set_work_email: Callback::new(move |mail: String| {
            set_profile.update(|p| *p = std::mem::take(p).with_work_email(mail));
        }),
    };

    let handles = PortalHandles {
        token,
        profile,
        loading_page,
        alert,
        logout_modal,
        add_mail_modal,
        actions,
    };
    let writers = PortalWriters {
        profile: set_profile,
        loading_page: set_loading_page,
        alert: set_alert,
        logout_modal: set_logout_modal,
        add_mail_modal: set_add_mail_modal,
    };
    (handles, writers)
}
