//! Create or edit one student.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/aluno` creates, `/aluno/:id/edit` edits. Both are behind the login
//! guard. A 400 while loading an existing record means it is gone: the
//! server's messages are shown and the user is sent home.

#[cfg(test)]
#[path = "aluno_test.rs"]
mod aluno_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::{use_notifier, use_services};
use crate::components::form_field::TextField;
use crate::components::loading::Loading;
use crate::net::api::ApiError;
use crate::net::types::AlunoForm;
use crate::pages::alunos::edit_path;
use crate::routes::HOME_PATH;
use crate::state::toast::Notifier;
use crate::util::validate::validate_aluno;

pub const CREATED_MESSAGE: &str = "Aluno(a) cadastrado com sucesso";
pub const UPDATED_MESSAGE: &str = "Dados atualizados com sucesso";
pub const NOT_FOUND_MESSAGE: &str = "Aluno não encontrado";

/// What the form is for, from the optional `:id` segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlunoTarget {
    Create,
    Edit(i64),
    /// An `:id` that is not a record id; never falls back to creating.
    Invalid(String),
}

pub fn aluno_target(raw: Option<&str>) -> AlunoTarget {
    match raw {
        None => AlunoTarget::Create,
        Some(raw) => parse_id(Some(raw)).map_or_else(|| AlunoTarget::Invalid(raw.to_owned()), AlunoTarget::Edit),
    }
}

/// Numeric `:id` route parameter.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|id| id.trim().parse().ok())
}

/// Messages to show for a failed load, and whether to leave the page.
pub fn load_failure(err: &ApiError) -> (Vec<String>, bool) {
    match err {
        ApiError::SessionExpired => (Vec::new(), false),
        ApiError::Rejected { status: 400, .. } => (err.messages(), true),
        _ => (err.messages(), false),
    }
}

/// Messages to show for a failed save; expiry is reported by the auth task.
pub fn save_failure(err: &ApiError) -> Vec<String> {
    match err {
        ApiError::SessionExpired => Vec::new(),
        _ => err.messages(),
    }
}

#[component]
pub fn AlunoPage() -> impl IntoView {
    let services = use_services();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = match aluno_target(params.get_untracked().get("id").as_deref()) {
        AlunoTarget::Create => None,
        AlunoTarget::Edit(id) => Some(id),
        AlunoTarget::Invalid(raw) => {
            log::warn!("no student with id {raw:?}");
            notifier.error(NOT_FOUND_MESSAGE);
            navigate(HOME_PATH, NavigateOptions::default());
            return ().into_any();
        }
    };

    let nome = RwSignal::new(String::new());
    let sobrenome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let idade = RwSignal::new(String::new());
    let peso = RwSignal::new(String::new());
    let altura = RwSignal::new(String::new());
    let foto = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let fill = move |form: AlunoForm| {
        nome.set(form.nome);
        sobrenome.set(form.sobrenome);
        email.set(form.email);
        idade.set(form.idade);
        peso.set(form.peso);
        altura.set(form.altura);
    };

    if let Some(id) = id {
        is_loading.set(true);
        let api = services.get_value().api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.get_aluno(id).await {
                Ok(aluno) => {
                    foto.set(aluno.photo_url().map(str::to_owned));
                    fill(aluno.to_form());
                }
                Err(e) => {
                    let (messages, leave) = load_failure(&e);
                    messages.iter().for_each(|message| notifier.error(message));
                    if leave {
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                }
            }
            is_loading.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = AlunoForm {
            nome: nome.get_untracked().trim().to_owned(),
            sobrenome: sobrenome.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            idade: idade.get_untracked().trim().to_owned(),
            peso: peso.get_untracked().trim().to_owned(),
            altura: altura.get_untracked().trim().to_owned(),
        };
        let errors = validate_aluno(&form);
        if !errors.is_empty() {
            errors.into_iter().for_each(|message| notifier.error(message));
            return;
        }

        is_loading.set(true);
        let api = services.get_value().api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let saved = match id {
                Some(id) => api.update_aluno(id, &form).await.map(|()| HOME_PATH.to_owned()),
                None => api.create_aluno(&form).await.map(|created| edit_path(created.id)),
            };
            is_loading.set(false);
            match saved {
                Ok(next) => {
                    notifier.success(if id.is_some() { UPDATED_MESSAGE } else { CREATED_MESSAGE });
                    navigate(&next, NavigateOptions::default());
                }
                Err(e) => save_failure(&e).iter().for_each(|message| notifier.error(message)),
            }
        });
    };

    view! {
        <section class="page page--aluno">
            <Loading is_loading/>
            <h1>{if id.is_some() { "Editar aluno" } else { "Novo aluno" }}</h1>
            {id.map(|id| view! {
                <div class="aluno__picture">
                    {move || match foto.get() {
                        Some(url) => view! { <img src=url alt=move || nome.get()/> }.into_any(),
                        None => view! { <span class="aluno__placeholder"></span> }.into_any(),
                    }}
                    <A href=format!("/fotos/{id}") attr:title="Alterar foto">"Alterar foto"</A>
                </div>
            })}
            <form class="form" on:submit=on_submit>
                <TextField label="Nome" value=nome/>
                <TextField label="Sobrenome" value=sobrenome/>
                <TextField label="E-mail" kind="email" value=email/>
                <TextField label="Idade" kind="number" value=idade/>
                <TextField label="Peso" value=peso/>
                <TextField label="Altura" value=altura/>
                <button type="submit">{if id.is_some() { "Salvar alterações" } else { "Criar aluno" }}</button>
            </form>
        </section>
    }
    .into_any()
}
