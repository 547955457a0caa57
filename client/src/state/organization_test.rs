use super::*;
use crate::net::types::OrganizationUser;

fn org(ipa_code: &str, status: RegistrationStatus) -> Organization {
    Organization {
        ipa_code: ipa_code.to_owned(),
        fiscal_code: "02438750586".to_owned(),
        pec: "protocollo@pec.example.it".to_owned(),
        name: format!("Ente {ipa_code}"),
        registration_status: status,
        users: None,
    }
}

// =============================================================
// organization_status
// =============================================================

#[test]
fn empty_list_is_pre_draft() {
    assert_eq!(organization_status(&[]), RegistrationStatus::PreDraft);
}

#[test]
fn first_element_decides_status() {
    let list = [
        org("a", RegistrationStatus::Registered),
        org("b", RegistrationStatus::Draft),
        org("c", RegistrationStatus::PreDraft),
    ];
    assert_eq!(organization_status(&list), RegistrationStatus::Registered);

    let list = [org("b", RegistrationStatus::Draft), org("a", RegistrationStatus::Registered)];
    assert_eq!(organization_status(&list), RegistrationStatus::Draft);
}

// =============================================================
// card_layout
// =============================================================

#[test]
fn resend_hidden_iff_registered() {
    for status in [
        RegistrationStatus::PreDraft,
        RegistrationStatus::Draft,
        RegistrationStatus::Registered,
    ] {
        assert_eq!(
            card_layout(status).show_resend,
            status != RegistrationStatus::Registered,
            "{status:?}"
        );
    }
}

#[test]
fn image_and_details_shown_unless_pre_draft() {
    let pre_draft = card_layout(RegistrationStatus::PreDraft);
    assert!(!pre_draft.show_image);
    assert!(!pre_draft.show_details);

    for status in [RegistrationStatus::Draft, RegistrationStatus::Registered] {
        let layout = card_layout(status);
        assert!(layout.show_image);
        assert!(layout.show_details);
    }
}

#[test]
fn icon_per_status() {
    assert_eq!(card_layout(RegistrationStatus::PreDraft).icon, Some(CardIcon::DashboardStart));
    assert_eq!(card_layout(RegistrationStatus::Draft).icon, Some(CardIcon::DocumentsWaiting));
    assert_eq!(card_layout(RegistrationStatus::Registered).icon, None);
}

#[test]
fn icon_assets_differ() {
    assert_ne!(CardIcon::DashboardStart.asset(), CardIcon::DocumentsWaiting.asset());
}

// =============================================================
// detail_rows
// =============================================================

#[test]
fn detail_rows_without_users() {
    let rows = detail_rows(&org("c_h501", RegistrationStatus::Draft));
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], ("IPA code", "c_h501".to_owned()));
}

#[test]
fn detail_rows_with_users_adds_delegates() {
    let mut organization = org("c_h501", RegistrationStatus::Draft);
    organization.users = Some(vec![OrganizationUser {
        given_name: "Mario".to_owned(),
        family_name: "Rossi".to_owned(),
    }]);
    let rows = detail_rows(&organization);
    assert_eq!(rows.last(), Some(&("Delegates", "Mario Rossi".to_owned())));
}
