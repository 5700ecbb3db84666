use super::*;

#[test]
fn sign_up_always_sends_password() {
    let form = account_form(" Ana ", "ana@escola.com", "", false);
    assert_eq!(form.nome, "Ana");
    assert_eq!(form.password, Some(String::new()));
}

#[test]
fn blank_password_on_update_is_omitted() {
    let form = account_form("Ana", "ana@escola.com", "", true);
    assert_eq!(form.password, None);
    assert!(validate_account(&form, true).is_empty());
}

#[test]
fn new_password_on_update_is_sent() {
    let form = account_form("Ana", "ana@escola.com", "nova-senha", true);
    assert_eq!(form.password.as_deref(), Some("nova-senha"));
}

#[test]
fn sign_up_without_password_fails_validation() {
    let form = account_form("Ana", "ana@escola.com", "", false);
    assert!(!validate_account(&form, false).is_empty());
}
