use super::*;

fn filled_draft() -> RegistrationDraft {
    RegistrationDraft {
        ipa_code: " c_h501 ".to_owned(),
        given_name: "Anna".to_owned(),
        family_name: "Bianchi".to_owned(),
        fiscal_code: "bncnna75c41h501k".to_owned(),
        phone_number: "+39 06 1234567".to_owned(),
    }
}

#[test]
fn parse_sign_up_step_accepts_known_steps() {
    assert_eq!(parse_sign_up_step(Some("1")), 1);
    assert_eq!(parse_sign_up_step(Some("2")), 2);
    assert_eq!(parse_sign_up_step(Some("3")), 3);
}

#[test]
fn parse_sign_up_step_falls_back_to_first_step() {
    assert_eq!(parse_sign_up_step(None), 1);
    assert_eq!(parse_sign_up_step(Some("")), 1);
    assert_eq!(parse_sign_up_step(Some("0")), 1);
    assert_eq!(parse_sign_up_step(Some("4")), 1);
    assert_eq!(parse_sign_up_step(Some("two")), 1);
    assert_eq!(parse_sign_up_step(Some("-1")), 1);
}

#[test]
fn validate_draft_accepts_filled_draft() {
    assert_eq!(validate_draft(&filled_draft()), Ok(()));
}

#[test]
fn validate_draft_reports_first_missing_piece() {
    let mut draft = filled_draft();
    draft.ipa_code = "  ".to_owned();
    assert_eq!(validate_draft(&draft), Err("Enter the IPA code of the organization."));

    let mut draft = filled_draft();
    draft.family_name.clear();
    assert_eq!(validate_draft(&draft), Err("Enter the legal representative's name."));
}

#[test]
fn validate_draft_rejects_bad_fiscal_code_and_phone() {
    let mut draft = filled_draft();
    draft.fiscal_code = "BNCNNA75C41".to_owned();
    assert_eq!(validate_draft(&draft), Err("The fiscal code must be 16 letters or digits."));

    let mut draft = filled_draft();
    draft.phone_number = "call me".to_owned();
    assert_eq!(validate_draft(&draft), Err("Enter a valid phone number."));

    draft.phone_number = "123".to_owned();
    assert!(validate_draft(&draft).is_err());
}

#[test]
fn to_params_trims_and_uppercases_fiscal_code() {
    let params = filled_draft().to_params();
    assert_eq!(params.ipa_code, "c_h501");
    assert_eq!(params.legal_representative.fiscal_code, "BNCNNA75C41H501K");
    assert_eq!(params.legal_representative.phone_number, "+39 06 1234567");
}

#[test]
fn draft_key_slot_and_value_address_same_field() {
    let mut draft = RegistrationDraft::default();
    for key in DraftKey::ALL {
        *key.slot(&mut draft) = key.label().to_owned();
    }
    for key in DraftKey::ALL {
        assert_eq!(key.value(&draft), key.label());
    }
    assert_eq!(draft.ipa_code, "IPA code");
}
