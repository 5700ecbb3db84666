//! Account sign-up, or account update when already logged in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{use_notifier, use_services, use_session};
use crate::components::form_field::TextField;
use crate::components::loading::Loading;
use crate::net::api::ApiError;
use crate::net::types::AccountForm;
use crate::routes::LOGIN_PATH;
use crate::state::toast::Notifier;
use crate::util::validate::validate_account;

pub const ACCOUNT_CREATED_MESSAGE: &str = "Você fez seu cadastro";
pub const ACCOUNT_UPDATED_MESSAGE: &str = "Você alterou seus dados";

/// Build the request body; a blank password on update keeps the old one.
pub fn account_form(nome: &str, email: &str, password: &str, is_update: bool) -> AccountForm {
    let password = if is_update && password.is_empty() { None } else { Some(password.to_owned()) };
    AccountForm { nome: nome.trim().to_owned(), email: email.trim().to_owned(), password }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let services = use_services();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let is_update = Signal::derive(move || session.get().is_logged_in());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let updating = is_update.get_untracked();
        let form = account_form(&nome.get_untracked(), &email.get_untracked(), &password.get_untracked(), updating);
        let errors = validate_account(&form, updating);
        if !errors.is_empty() {
            errors.into_iter().for_each(|message| notifier.error(message));
            return;
        }

        is_loading.set(true);
        let api = services.get_value().api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = if updating { api.update_account(&form).await } else { api.create_account(&form).await };
            is_loading.set(false);
            match result {
                Ok(()) if updating => {
                    password.set(String::new());
                    notifier.success(ACCOUNT_UPDATED_MESSAGE);
                }
                Ok(()) => {
                    notifier.success(ACCOUNT_CREATED_MESSAGE);
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(ApiError::SessionExpired) => {}
                Err(e) => e.messages().iter().for_each(|message| notifier.error(message)),
            }
        });
    };

    view! {
        <section class="page page--register">
            <Loading is_loading/>
            <h1>{move || if is_update.get() { "Editar dados" } else { "Crie sua conta" }}</h1>
            <form class="form" on:submit=on_submit>
                <TextField label="Nome" value=nome/>
                <TextField label="E-mail" kind="email" value=email/>
                <TextField label="Senha" kind="password" value=password/>
                <button type="submit">
                    {move || if is_update.get() { "Salvar" } else { "Criar minha conta" }}
                </button>
            </form>
        </section>
    }
}
