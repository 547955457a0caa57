use super::*;

fn organization(status: RegistrationStatus, users: Option<Vec<OrganizationUser>>) -> Organization {
    Organization {
        ipa_code: "c_h501".to_owned(),
        fiscal_code: "02438750586".to_owned(),
        pec: "protocollo@pec.comune.roma.it".to_owned(),
        name: "Comune di Roma".to_owned(),
        registration_status: status,
        users,
    }
}

// =============================================================
// UserProfile
// =============================================================

#[test]
fn profile_decodes_partial_body_with_defaults() {
    let profile: UserProfile = serde_json::from_str(r#"{"given_name":"Mario"}"#).unwrap();
    assert_eq!(profile.given_name, "Mario");
    assert_eq!(profile.family_name, "");
    assert_eq!(profile.work_email, None);
}

#[test]
fn profile_decodes_full_body() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "email": "mario@spid.it",
        "family_name": "Rossi",
        "fiscal_code": "RSSMRA80A01H501U",
        "given_name": "Mario",
        "role": "ORG_DELEGATE",
        "work_email": "m.rossi@comune.roma.it"
    }))
    .unwrap();
    assert_eq!(profile.display_name(), "Mario Rossi");
    assert!(profile.has_work_email());
    assert_eq!(UserRole::parse(&profile.role), Some(UserRole::OrgDelegate));
}

#[test]
fn empty_work_email_counts_as_missing() {
    let profile = UserProfile {
        work_email: Some(String::new()),
        ..UserProfile::default()
    };
    assert!(!profile.has_work_email());
}

#[test]
fn with_work_email_keeps_other_fields() {
    let profile = UserProfile {
        email: "mario@spid.it".to_owned(),
        given_name: "Mario".to_owned(),
        ..UserProfile::default()
    };
    let updated = profile.clone().with_work_email("work@pa.it".to_owned());
    assert_eq!(updated.work_email.as_deref(), Some("work@pa.it"));
    assert_eq!(updated.email, profile.email);
    assert_eq!(updated.given_name, profile.given_name);
}

#[test]
fn display_name_of_empty_profile_is_single_space() {
    assert_eq!(UserProfile::default().display_name(), " ");
}

// =============================================================
// UserRole
// =============================================================

#[test]
fn user_role_parses_known_roles() {
    assert_eq!(UserRole::parse("DEVELOPER"), Some(UserRole::Developer));
    assert_eq!(UserRole::parse("ORG_MANAGER"), Some(UserRole::OrgManager));
    assert_eq!(UserRole::parse("ADMIN"), Some(UserRole::Admin));
}

#[test]
fn user_role_rejects_unknown_and_empty() {
    assert_eq!(UserRole::parse(""), None);
    assert_eq!(UserRole::parse("org_delegate"), None);
}

#[test]
fn user_role_badge_labels() {
    assert_eq!(UserRole::OrgDelegate.badge_label(), "Delegate");
    assert_eq!(UserRole::OrgManager.badge_label(), "Legal rep.");
}

// =============================================================
// Organization
// =============================================================

#[test]
fn registration_status_uses_screaming_snake_case() {
    let status: RegistrationStatus = serde_json::from_str(r#""PRE_DRAFT""#).unwrap();
    assert_eq!(status, RegistrationStatus::PreDraft);
    assert_eq!(
        serde_json::to_string(&RegistrationStatus::Registered).unwrap(),
        r#""REGISTERED""#
    );
}

#[test]
fn organization_without_users_decodes() {
    let org: Organization = serde_json::from_value(serde_json::json!({
        "ipa_code": "c_h501",
        "fiscal_code": "02438750586",
        "pec": "protocollo@pec.comune.roma.it",
        "name": "Comune di Roma",
        "registration_status": "DRAFT"
    }))
    .unwrap();
    assert_eq!(org.registration_status, RegistrationStatus::Draft);
    assert_eq!(org.users, None);
    assert_eq!(org.delegate_names(), None);
}

#[test]
fn delegate_names_are_comma_joined() {
    let org = organization(
        RegistrationStatus::Draft,
        Some(vec![
            OrganizationUser {
                given_name: "Mario".to_owned(),
                family_name: "Rossi".to_owned(),
            },
            OrganizationUser {
                given_name: "Anna".to_owned(),
                family_name: "Bianchi".to_owned(),
            },
        ]),
    );
    assert_eq!(org.delegate_names().as_deref(), Some("Mario Rossi,Anna Bianchi"));
}

#[test]
fn organization_collection_defaults_to_empty_items() {
    let collection: OrganizationCollection = serde_json::from_str("{}").unwrap();
    assert!(collection.items.is_empty());
}

#[test]
fn registration_params_serialize_nested_representative() {
    let params = OrganizationRegistrationParams {
        ipa_code: "c_h501".to_owned(),
        legal_representative: LegalRepresentative {
            given_name: "Anna".to_owned(),
            family_name: "Bianchi".to_owned(),
            fiscal_code: "BNCNNA80A41H501X".to_owned(),
            phone_number: "0612345678".to_owned(),
        },
    };
    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(value["ipa_code"], "c_h501");
    assert_eq!(value["legal_representative"]["family_name"], "Bianchi");
}
