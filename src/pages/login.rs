//! Login page: e-mail and password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page validates input and submits a `LoginIntent`; the auth task does
//! the request, the toast, and the navigation back to `returnPath`. The
//! submit button stays disabled while a login is in flight.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::{use_notifier, use_services, use_session};
use crate::auth::handler::AuthError;
use crate::components::form_field::TextField;
use crate::components::loading::Loading;
use crate::net::api::UNKNOWN_ERROR_MESSAGE;
use crate::routes::{RETURN_PATH_PARAM, resolve_return_path};
use crate::state::session::LoginIntent;
use crate::state::toast::Notifier;
use crate::util::validate::validate_login;

/// Validate the form and build the intent to submit.
///
/// # Errors
///
/// The validation messages to show, in field order.
pub fn build_login_intent(email: &str, password: &str, return_param: Option<&str>) -> Result<LoginIntent, Vec<&'static str>> {
    let email = email.trim();
    let errors = validate_login(email, password);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginIntent {
        email: email.to_owned(),
        password: password.to_owned(),
        return_path: resolve_return_path(return_param),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let services = use_services();
    let notifier = use_notifier();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = Signal::derive(move || session.get().is_loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get_untracked().is_loading() {
            return;
        }
        let return_param = query.get_untracked().get(RETURN_PATH_PARAM);
        let intent = match build_login_intent(&email.get_untracked(), &password.get_untracked(), return_param.as_deref()) {
            Ok(intent) => intent,
            Err(errors) => {
                errors.into_iter().for_each(|message| notifier.error(message));
                return;
            }
        };
        match services.get_value().auth.submit_login(intent) {
            Ok(()) | Err(AuthError::LoginInProgress) => {}
            Err(e) => {
                log::error!("login not submitted: {e}");
                notifier.error(UNKNOWN_ERROR_MESSAGE);
            }
        }
    };

    view! {
        <section class="page page--login">
            <Loading is_loading/>
            <h1>"Login"</h1>
            <form class="form" on:submit=on_submit>
                <TextField label="E-mail" kind="email" value=email disabled=is_loading/>
                <TextField label="Senha" kind="password" value=password disabled=is_loading/>
                <button type="submit" disabled=move || is_loading.get()>
                    "Acessar"
                </button>
            </form>
        </section>
    }
}
