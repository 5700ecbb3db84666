//! Route table and the login guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is declared once in `ROUTES` with a `requires_auth` flag. The
//! `Guarded` component calls `admit_location` on each navigation; a redirect
//! carries the requested path to `/login`, which sends the user back after a
//! successful login.
//!
//! DESIGN
//! ======
//! `admit` is pure: same route and session, same decision. Navigation state
//! travels as the `returnPath` query parameter so it survives a reload.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt::Write as _;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const RETURN_PATH_PARAM: &str = "returnPath";

/// Screens the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Alunos,
    Aluno,
    Fotos,
    Login,
    Register,
    NotFound,
}

/// Static declaration of one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Pattern; `:name` segments match any single segment.
    pub path: &'static str,
    pub requires_auth: bool,
    pub page: Page,
}

pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/", requires_auth: false, page: Page::Alunos },
    RouteDescriptor { path: "/aluno/:id/edit", requires_auth: true, page: Page::Aluno },
    RouteDescriptor { path: "/aluno", requires_auth: true, page: Page::Aluno },
    RouteDescriptor { path: "/fotos/:id", requires_auth: true, page: Page::Fotos },
    RouteDescriptor { path: "/login", requires_auth: false, page: Page::Login },
    RouteDescriptor { path: "/register", requires_auth: false, page: Page::Register },
];

pub static NOT_FOUND_ROUTE: RouteDescriptor = RouteDescriptor { path: "*", requires_auth: false, page: Page::NotFound };

/// State handed to the login page by a guard redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub return_path: String,
}

/// Outcome of guarding one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect { to: &'static str, state: NavigationState },
}

/// A location resolved against the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDescriptor,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

/// Decide whether `route` may render for `session`.
#[must_use]
pub fn admit(route: &RouteDescriptor, session: &Session) -> Decision {
    decide(route.requires_auth, route.path, session)
}

/// Guard a concrete location; redirects carry the location itself.
#[must_use]
pub fn admit_location(location: &str, session: &Session) -> Decision {
    let matched = match_route(location);
    decide(matched.route.requires_auth, &normalize_path(location), session)
}

fn decide(requires_auth: bool, return_path: &str, session: &Session) -> Decision {
    if !requires_auth || session.is_logged_in() {
        return Decision::Render;
    }
    Decision::Redirect { to: LOGIN_PATH, state: NavigationState { return_path: return_path.to_owned() } }
}

/// Resolve `location` to its route; unknown paths map to `NOT_FOUND_ROUTE`.
#[must_use]
pub fn match_route(location: &str) -> RouteMatch {
    let path = normalize_path(location);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    for route in ROUTES {
        let pattern: Vec<&'static str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() != segments.len() {
            continue;
        }
        let mut params = Vec::new();
        let matched = pattern.iter().zip(&segments).all(|(expected, actual)| {
            if let Some(name) = (*expected).strip_prefix(':') {
                params.push((name, (*actual).to_owned()));
                true
            } else {
                expected == actual
            }
        });
        if matched {
            return RouteMatch { route, params };
        }
    }
    RouteMatch { route: &NOT_FOUND_ROUTE, params: Vec::new() }
}

/// Drop query, fragment, and trailing slashes; always starts with `/`.
fn normalize_path(location: &str) -> String {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let trimmed = location[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_PATH.to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// `path` with the return path appended as a query parameter.
#[must_use]
pub fn with_return_path(path: &str, return_path: &str) -> String {
    format!("{path}?{RETURN_PATH_PARAM}={}", encode_query_value(return_path))
}

/// Where the login page should send the user afterwards.
///
/// Only same-origin absolute paths are honored; anything else, and the
/// login page itself, falls back to `/`. Browsers read `\` as `/`, so any
/// backslash is rejected.
#[must_use]
pub fn resolve_return_path(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && match_route(path).route.page != Page::Login =>
        {
            path.to_owned()
        }
        _ => HOME_PATH.to_owned(),
    }
}

fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' | b':' => {
                out.push(char::from(byte));
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Imperative navigation collaborator.
pub trait Navigator {
    fn push(&self, path: &str, state: Option<&NavigationState>);
    fn current_path(&self) -> String;
}

/// Navigator backed by the Leptos router.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
    pathname: Memo<String>,
}

impl RouterNavigator {
    pub fn new<F>(navigate: F, pathname: Memo<String>) -> Self
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        Self { navigate: Rc::new(navigate), pathname }
    }
}

impl Navigator for RouterNavigator {
    fn push(&self, path: &str, state: Option<&NavigationState>) {
        let target = match state {
            Some(state) => with_return_path(path, &state.return_path),
            None => path.to_owned(),
        };
        log::debug!("navigate {target}");
        (self.navigate)(&target, NavigateOptions::default());
    }

    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }
}
