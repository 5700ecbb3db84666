use super::*;

// =============================================================
// Route parameter
// =============================================================

#[test]
fn parse_id_reads_numeric_param() {
    assert_eq!(parse_id(Some("42")), Some(42));
}

#[test]
fn parse_id_rejects_missing_or_garbage() {
    assert_eq!(parse_id(None), None);
    assert_eq!(parse_id(Some("abc")), None);
    assert_eq!(parse_id(Some("")), None);
}

#[test]
fn aluno_target_distinguishes_create_edit_and_garbage() {
    assert_eq!(aluno_target(None), AlunoTarget::Create);
    assert_eq!(aluno_target(Some("7")), AlunoTarget::Edit(7));
    assert_eq!(aluno_target(Some("abc")), AlunoTarget::Invalid("abc".to_owned()));
}

#[test]
fn empty_id_segment_is_not_a_create() {
    assert_eq!(aluno_target(Some("")), AlunoTarget::Invalid(String::new()));
}

// =============================================================
// Failures
// =============================================================

#[test]
fn bad_request_on_load_shows_errors_and_leaves() {
    let err = ApiError::Rejected { status: 400, errors: vec!["Aluno não existe".to_owned()] };
    assert_eq!(load_failure(&err), (vec!["Aluno não existe".to_owned()], true));
}

#[test]
fn other_load_failures_stay_on_page() {
    let err = ApiError::Rejected { status: 500, errors: Vec::new() };
    let (messages, leave) = load_failure(&err);
    assert_eq!(messages, vec!["Erro desconhecido"]);
    assert!(!leave);
}

#[test]
fn expired_session_is_left_to_the_auth_task() {
    assert_eq!(load_failure(&ApiError::SessionExpired), (Vec::new(), false));
    assert!(save_failure(&ApiError::SessionExpired).is_empty());
}

#[test]
fn save_failure_lists_server_errors() {
    let err = ApiError::Rejected { status: 400, errors: vec!["Email já existe".to_owned(), "Nome inválido".to_owned()] };
    assert_eq!(save_failure(&err), vec!["Email já existe", "Nome inválido"]);
}
