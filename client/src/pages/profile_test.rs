use super::*;

#[test]
fn profile_rows_render_known_role_and_work_email() {
    let profile = UserProfile {
        email: "mario@spid.it".to_owned(),
        family_name: "Rossi".to_owned(),
        fiscal_code: "RSSMRA80A01H501U".to_owned(),
        given_name: "Mario".to_owned(),
        role: "ORG_DELEGATE".to_owned(),
        work_email: Some("m.rossi@pa.it".to_owned()),
    };
    let rows = profile_rows(&profile);
    assert_eq!(rows[0], ("Name", "Mario Rossi".to_owned()));
    assert_eq!(rows[2], ("Role", "Delegate".to_owned()));
    assert_eq!(rows[4], ("Work email", "m.rossi@pa.it".to_owned()));
}

#[test]
fn profile_rows_placeholder_for_missing_work_email() {
    let rows = profile_rows(&UserProfile::default());
    assert_eq!(rows[0], ("Name", String::new()));
    assert_eq!(rows[4], ("Work email", "—".to_owned()));
}

#[test]
fn profile_rows_keep_unknown_role_verbatim() {
    let profile = UserProfile {
        role: "AUDITOR".to_owned(),
        ..UserProfile::default()
    };
    assert_eq!(profile_rows(&profile)[2], ("Role", "AUDITOR".to_owned()));
}
