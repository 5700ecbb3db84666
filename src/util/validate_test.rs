use super::*;

fn aluno_form() -> AlunoForm {
    AlunoForm {
        nome: "Ana".to_owned(),
        sobrenome: "Souza".to_owned(),
        email: "ana@escola.com".to_owned(),
        idade: "21".to_owned(),
        peso: "60,5".to_owned(),
        altura: "1.70".to_owned(),
    }
}

// =============================================================
// Primitive checks
// =============================================================

#[test]
fn is_email_accepts_common_addresses() {
    assert!(is_email("ana@escola.com"));
    assert!(is_email("  a.b+c@mail.escola.com.br "));
}

#[test]
fn is_email_rejects_malformed_addresses() {
    for bad in ["", "ana", "ana@", "@escola.com", "ana@escola", "a@b@c.com", "ana @escola.com", "ana@escola..com"] {
        assert!(!is_email(bad), "{bad}");
    }
}

#[test]
fn is_int_and_is_float() {
    assert!(is_int("42"));
    assert!(!is_int("4.2"));
    assert!(is_float("4.2"));
    assert!(is_float("4,2"));
    assert!(!is_float(""));
    assert!(!is_float("abc"));
    assert!(!is_float("inf"));
}

// =============================================================
// Forms
// =============================================================

#[test]
fn validate_login_accepts_valid_input() {
    assert!(validate_login("ana@escola.com", "segredo1").is_empty());
}

#[test]
fn validate_login_reports_each_problem() {
    assert_eq!(validate_login("ana", "123"), vec![INVALID_EMAIL, INVALID_PASSWORD]);
    assert_eq!(validate_login("ana@escola.com", &"x".repeat(51)), vec![INVALID_PASSWORD]);
}

#[test]
fn validate_aluno_accepts_valid_form() {
    assert!(validate_aluno(&aluno_form()).is_empty());
}

#[test]
fn validate_aluno_reports_all_fields_in_order() {
    let form = AlunoForm {
        nome: "Al".to_owned(),
        sobrenome: String::new(),
        email: "x".to_owned(),
        idade: "vinte".to_owned(),
        peso: String::new(),
        altura: "alto".to_owned(),
    };
    assert_eq!(
        validate_aluno(&form),
        vec![INVALID_NOME, INVALID_SOBRENOME, INVALID_EMAIL, INVALID_IDADE, INVALID_PESO, INVALID_ALTURA]
    );
}

#[test]
fn validate_aluno_name_upper_bound_is_exclusive() {
    let mut form = aluno_form();
    form.nome = "a".repeat(254);
    assert!(validate_aluno(&form).is_empty());
    form.nome = "a".repeat(255);
    assert_eq!(validate_aluno(&form), vec![INVALID_NOME]);
}

#[test]
fn validate_account_requires_password_on_create() {
    let form = AccountForm { nome: "Ana".to_owned(), email: "ana@escola.com".to_owned(), password: None };
    assert_eq!(validate_account(&form, false), vec![INVALID_PASSWORD]);
    assert!(validate_account(&form, true).is_empty());
}

#[test]
fn validate_account_checks_password_length_when_present() {
    let form = AccountForm {
        nome: "Ana".to_owned(),
        email: "ana@escola.com".to_owned(),
        password: Some("123".to_owned()),
    };
    assert_eq!(validate_account(&form, true), vec![INVALID_PASSWORD]);
}
