//! Transient view state: alert banner and logout prompt.
//!
//! DESIGN
//! ======
//! Keeps presentation flags out of session data so modals and banners can be
//! driven by any action without touching the profile.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual severity of the alert banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertColor {
    #[default]
    Info,
    Danger,
}

impl AlertColor {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "app-alert alert alert-info",
            Self::Danger => "app-alert alert alert-danger",
        }
    }
}

/// Dismissible alert banner shown above the routed views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub color: AlertColor,
    pub text: String,
    pub visible: bool,
}

impl AlertState {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            color: AlertColor::Info,
            text: text.into(),
            visible: true,
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            color: AlertColor::Danger,
            text: text.into(),
            visible: true,
        }
    }
}

/// Logout confirmation modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogoutModalState {
    pub visible: bool,
    /// Opened because the backend rejected the session, not by the user.
    pub from_expired_token: bool,
}

impl LogoutModalState {
    /// Prompt raised by a rejected session.
    pub fn expired() -> Self {
        Self {
            visible: true,
            from_expired_token: true,
        }
    }

    /// Prompt raised by the user's logout action.
    pub fn requested() -> Self {
        Self {
            visible: true,
            from_expired_token: false,
        }
    }
}
