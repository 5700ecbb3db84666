use super::*;
use crate::util::validate::{INVALID_EMAIL, INVALID_PASSWORD};

#[test]
fn valid_form_builds_intent_with_trimmed_email() {
    let intent = build_login_intent("  ana@escola.com ", "segredo", Some("/aluno/3/edit")).unwrap();
    assert_eq!(intent.email, "ana@escola.com");
    assert_eq!(intent.password, "segredo");
    assert_eq!(intent.return_path, "/aluno/3/edit");
}

#[test]
fn missing_return_path_defaults_to_home() {
    let intent = build_login_intent("ana@escola.com", "segredo", None).unwrap();
    assert_eq!(intent.return_path, "/");
}

#[test]
fn foreign_return_path_is_not_followed() {
    let intent = build_login_intent("ana@escola.com", "segredo", Some("https://evil.example")).unwrap();
    assert_eq!(intent.return_path, "/");
}

#[test]
fn invalid_fields_report_every_message() {
    let errors = build_login_intent("ana", "123", Some("/")).unwrap_err();
    assert_eq!(errors, vec![INVALID_EMAIL, INVALID_PASSWORD]);
}
