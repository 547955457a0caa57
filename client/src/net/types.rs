//! Wire DTOs for the onboarding backend.
//!
//! DESIGN
//! ======
//! Profile fields default to empty so a partial body still decodes. The
//! backend is the trust boundary; nothing past JSON decoding is validated here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as returned by `GET /profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Address provided by the identity provider.
    pub email: String,
    pub family_name: String,
    pub fiscal_code: String,
    pub given_name: String,
    /// Raw role string; see [`UserRole::parse`].
    pub role: String,
    /// Work address chosen by the user, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_email: Option<String>,
}

impl UserProfile {
    /// `"{given_name} {family_name}"`, as shown in the central header.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// True when a non-empty work email is present.
    pub fn has_work_email(&self) -> bool {
        self.work_email.as_deref().is_some_and(|mail| !mail.is_empty())
    }

    /// Replace only the work email, carrying every other field over.
    #[must_use]
    pub fn with_work_email(self, work_email: String) -> Self {
        Self {
            work_email: Some(work_email),
            ..self
        }
    }
}

/// Roles the backend assigns to portal users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserRole {
    OrgDelegate,
    Developer,
    OrgManager,
    Admin,
}

impl UserRole {
    /// Parse the wire representation; unknown or empty roles yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ORG_DELEGATE" => Some(Self::OrgDelegate),
            "DEVELOPER" => Some(Self::Developer),
            "ORG_MANAGER" => Some(Self::OrgManager),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Short label for the header badge.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::OrgDelegate => "Delegate",
            Self::Developer => "Developer",
            Self::OrgManager => "Legal rep.",
            Self::Admin => "Admin",
        }
    }
}

/// Onboarding lifecycle stage of an organization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    /// No organization registered yet.
    #[default]
    PreDraft,
    /// Registered, waiting for signed documents.
    Draft,
    Registered,
}

/// A delegate attached to an organization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationUser {
    pub given_name: String,
    pub family_name: String,
}

/// Organization record owned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub ipa_code: String,
    pub fiscal_code: String,
    pub pec: String,
    pub name: String,
    pub registration_status: RegistrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<OrganizationUser>>,
}

impl Organization {
    /// Comma-joined delegate names, or `None` when the backend sent no users.
    pub fn delegate_names(&self) -> Option<String> {
        self.users.as_ref().map(|users| {
            users
                .iter()
                .map(|user| format!("{} {}", user.given_name, user.family_name))
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}

/// Body of `GET /organizations`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct OrganizationCollection {
    #[serde(default)]
    pub items: Vec<Organization>,
}

/// Legal representative submitted with a new organization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LegalRepresentative {
    pub given_name: String,
    pub family_name: String,
    pub fiscal_code: String,
    pub phone_number: String,
}

/// Body of `POST /organizations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrganizationRegistrationParams {
    pub ipa_code: String,
    pub legal_representative: LegalRepresentative,
}

/// Body of `PUT /profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorkEmailUpdate {
    pub work_email: String,
}
