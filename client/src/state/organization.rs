//! Organization card derivations.
//!
//! DESIGN
//! ======
//! One organization per user: the first list entry is "the" organization and
//! an empty list means onboarding has not started. Every visual branch of the
//! card derives from the resulting status alone.

#[cfg(test)]
#[path = "organization_test.rs"]
mod organization_test;

use crate::net::types::{Organization, RegistrationStatus};

/// Status of the user's organization, `PreDraft` when there is none.
pub fn organization_status(organizations: &[Organization]) -> RegistrationStatus {
    organizations
        .first()
        .map_or(RegistrationStatus::PreDraft, |org| org.registration_status)
}

/// Right-hand illustration of the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIcon {
    DashboardStart,
    DocumentsWaiting,
}

impl CardIcon {
    pub fn asset(self) -> &'static str {
        match self {
            Self::DashboardStart => "/assets/img/dashboard_start.svg",
            Self::DocumentsWaiting => "/assets/img/institution_document_approval_waiting.svg",
        }
    }
}

/// Which parts of the organization card are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLayout {
    /// Organization image panel on the left.
    pub show_image: bool,
    /// Organization details instead of the pre-draft call to action.
    pub show_details: bool,
    /// "Send documents again" action.
    pub show_resend: bool,
    pub icon: Option<CardIcon>,
}

pub fn card_layout(status: RegistrationStatus) -> CardLayout {
    match status {
        RegistrationStatus::PreDraft => CardLayout {
            show_image: false,
            show_details: false,
            show_resend: true,
            icon: Some(CardIcon::DashboardStart),
        },
        RegistrationStatus::Draft => CardLayout {
            show_image: true,
            show_details: true,
            show_resend: true,
            icon: Some(CardIcon::DocumentsWaiting),
        },
        RegistrationStatus::Registered => CardLayout {
            show_image: true,
            show_details: true,
            show_resend: false,
            icon: None,
        },
    }
}

/// Label/value rows of the details section, delegates only when known.
pub fn detail_rows(org: &Organization) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("IPA code", org.ipa_code.clone()),
        ("Fiscal code", org.fiscal_code.clone()),
        ("PEC", org.pec.clone()),
    ];
    if let Some(names) = org.delegate_names() {
        rows.push(("Delegates", names));
    }
    rows
}
