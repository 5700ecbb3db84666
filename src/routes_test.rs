use super::*;
use crate::state::session::SessionEvent;

fn logged_out() -> Session {
    Session::default()
}

fn logged_in() -> Session {
    let mut session = Session::default();
    session.apply(&SessionEvent::Rehydrated("tok123".to_owned()));
    session
}

fn loading() -> Session {
    let mut session = Session::default();
    session.apply(&SessionEvent::LoginRequested(crate::state::session::LoginIntent {
        email: "a@b.com".to_owned(),
        password: "segredo1".to_owned(),
        return_path: "/".to_owned(),
    }));
    session
}

// =============================================================
// admit
// =============================================================

#[test]
fn open_routes_render_for_any_session() {
    for route in ROUTES.iter().filter(|r| !r.requires_auth) {
        for session in [logged_out(), logged_in(), loading()] {
            assert_eq!(admit(route, &session), Decision::Render, "{}", route.path);
        }
    }
}

#[test]
fn closed_routes_redirect_when_logged_out() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(
            admit(route, &logged_out()),
            Decision::Redirect {
                to: "/login",
                state: NavigationState { return_path: route.path.to_owned() },
            }
        );
    }
}

#[test]
fn closed_routes_redirect_while_login_in_flight() {
    let route = RouteDescriptor { path: "/aluno", requires_auth: true, page: Page::Aluno };
    assert!(matches!(admit(&route, &loading()), Decision::Redirect { .. }));
}

#[test]
fn closed_routes_render_when_logged_in() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(admit(route, &logged_in()), Decision::Render);
    }
}

#[test]
fn admit_is_deterministic() {
    let route = RouteDescriptor { path: "/fotos/:id", requires_auth: true, page: Page::Fotos };
    let session = logged_out();
    assert_eq!(admit(&route, &session), admit(&route, &session));
}

// =============================================================
// admit_location
// =============================================================

#[test]
fn admit_location_carries_concrete_path() {
    assert_eq!(
        admit_location("/aluno/5/edit", &logged_out()),
        Decision::Redirect { to: "/login", state: NavigationState { return_path: "/aluno/5/edit".to_owned() } }
    );
}

#[test]
fn admit_location_unknown_path_renders() {
    assert_eq!(admit_location("/nao/existe", &logged_out()), Decision::Render);
}

#[test]
fn admit_location_ignores_query_and_trailing_slash() {
    assert_eq!(
        admit_location("/fotos/3/?x=1", &logged_out()),
        Decision::Redirect { to: "/login", state: NavigationState { return_path: "/fotos/3".to_owned() } }
    );
}

// =============================================================
// match_route
// =============================================================

#[test]
fn match_route_home() {
    assert_eq!(match_route("/").route.page, Page::Alunos);
    assert_eq!(match_route("").route.page, Page::Alunos);
}

#[test]
fn match_route_extracts_params() {
    let matched = match_route("/aluno/42/edit");
    assert_eq!(matched.route.page, Page::Aluno);
    assert_eq!(matched.param("id"), Some("42"));
    assert_eq!(matched.param("other"), None);
}

#[test]
fn match_route_prefers_exact_segment_count() {
    assert_eq!(match_route("/aluno").route.path, "/aluno");
    assert_eq!(match_route("/aluno/7").route.page, Page::NotFound);
}

#[test]
fn match_route_unknown_is_not_found() {
    assert_eq!(match_route("/logout").route.page, Page::NotFound);
}

// =============================================================
// Return path helpers
// =============================================================

#[test]
fn with_return_path_encodes_reserved_characters() {
    assert_eq!(with_return_path("/login", "/aluno/5/edit"), "/login?returnPath=/aluno/5/edit");
    assert_eq!(with_return_path("/login", "/a b&c"), "/login?returnPath=/a%20b%26c");
}

#[test]
fn resolve_return_path_defaults_to_home() {
    assert_eq!(resolve_return_path(None), "/");
    assert_eq!(resolve_return_path(Some("")), "/");
}

#[test]
fn resolve_return_path_keeps_local_paths() {
    assert_eq!(resolve_return_path(Some("/aluno/5/edit")), "/aluno/5/edit");
}

#[test]
fn resolve_return_path_rejects_external_and_login() {
    assert_eq!(resolve_return_path(Some("https://evil.example")), "/");
    assert_eq!(resolve_return_path(Some("//evil.example")), "/");
    assert_eq!(resolve_return_path(Some("/\\evil.example")), "/");
    assert_eq!(resolve_return_path(Some("\\\\evil.example")), "/");
    assert_eq!(resolve_return_path(Some("/aluno\\..\\x")), "/");
    assert_eq!(resolve_return_path(Some("/login")), "/");
}
