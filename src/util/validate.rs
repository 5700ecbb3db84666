//! Client-side form checks run before any request is sent.
//!
//! Each validator returns every failing message, in field order, so the page
//! can show one toast per problem.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{AccountForm, AlunoForm};

pub const INVALID_EMAIL: &str = "E-mail inválido";
pub const INVALID_PASSWORD: &str = "Senha deve ter entre 6 e 50 caracteres";
pub const INVALID_NOME: &str = "Nome precisa ter entre 3 e 255 caracteres";
pub const INVALID_SOBRENOME: &str = "Sobrenome precisa ter entre 3 e 255 caracteres";
pub const INVALID_IDADE: &str = "Idade inválida";
pub const INVALID_PESO: &str = "Peso inválido";
pub const INVALID_ALTURA: &str = "Altura inválida";

const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 6..=50;
const NAME_LEN: std::ops::Range<usize> = 3..255;

/// Local part, one `@`, and a dotted domain without blanks.
#[must_use]
pub fn is_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[must_use]
pub fn is_int(raw: &str) -> bool {
    raw.trim().parse::<i64>().is_ok()
}

/// Accepts `.` or `,` as decimal separator.
#[must_use]
pub fn is_float(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.replace(',', ".").parse::<f64>().is_ok_and(f64::is_finite)
}

fn char_len(raw: &str) -> usize {
    raw.chars().count()
}

/// Login form: email syntax and password length.
#[must_use]
pub fn validate_login(email: &str, password: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if !is_email(email) {
        errors.push(INVALID_EMAIL);
    }
    if !PASSWORD_LEN.contains(&char_len(password)) {
        errors.push(INVALID_PASSWORD);
    }
    errors
}

/// Student create/edit form.
#[must_use]
pub fn validate_aluno(form: &AlunoForm) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if !NAME_LEN.contains(&char_len(&form.nome)) {
        errors.push(INVALID_NOME);
    }
    if !NAME_LEN.contains(&char_len(&form.sobrenome)) {
        errors.push(INVALID_SOBRENOME);
    }
    if !is_email(&form.email) {
        errors.push(INVALID_EMAIL);
    }
    if !is_int(&form.idade) {
        errors.push(INVALID_IDADE);
    }
    if !is_float(&form.peso) {
        errors.push(INVALID_PESO);
    }
    if !is_float(&form.altura) {
        errors.push(INVALID_ALTURA);
    }
    errors
}

/// Account form. On update (`is_update`) a missing password keeps the
/// current one.
#[must_use]
pub fn validate_account(form: &AccountForm, is_update: bool) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if !NAME_LEN.contains(&char_len(&form.nome)) {
        errors.push(INVALID_NOME);
    }
    if !is_email(&form.email) {
        errors.push(INVALID_EMAIL);
    }
    match form.password.as_deref() {
        None if is_update => {}
        Some(password) if PASSWORD_LEN.contains(&char_len(password)) => {}
        _ => errors.push(INVALID_PASSWORD),
    }
    errors
}
