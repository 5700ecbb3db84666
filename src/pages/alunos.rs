//! Student list: photo, name, e-mail, edit link, and two-step delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route, open to everyone. Deleting asks first: the delete icon is
//! swapped for a confirm icon, and only the confirm click sends the request.

#[cfg(test)]
#[path = "alunos_test.rs"]
mod alunos_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::app::{use_notifier, use_services};
use crate::components::loading::Loading;
use crate::net::api::ApiError;
use crate::net::types::Aluno;
use crate::state::toast::Notifier;

pub const DELETED_MESSAGE: &str = "Aluno excluído com sucesso";
pub const DELETE_REQUIRES_LOGIN_MESSAGE: &str = "Você precisa estar logado para deletar um aluno";
pub const DELETE_FAILED_MESSAGE: &str = "Erro ao deletar aluno";
pub const LOAD_FAILED_MESSAGE: &str = "Erro ao carregar alunos";

/// Toast for a failed delete.
pub fn delete_error_message(err: &ApiError) -> &'static str {
    if err.status() == Some(401) {
        DELETE_REQUIRES_LOGIN_MESSAGE
    } else {
        DELETE_FAILED_MESSAGE
    }
}

pub fn remove_aluno(alunos: &mut Vec<Aluno>, id: i64) {
    alunos.retain(|aluno| aluno.id != id);
}

pub fn edit_path(id: i64) -> String {
    format!("/aluno/{id}/edit")
}

#[component]
pub fn AlunosPage() -> impl IntoView {
    let services = use_services();
    let notifier = use_notifier();

    let alunos = RwSignal::new(Vec::<Aluno>::new());
    let is_loading = RwSignal::new(true);
    let confirming = RwSignal::new(None::<i64>);

    let api = services.get_value().api.clone();
    leptos::task::spawn_local(async move {
        match api.list_alunos().await {
            Ok(list) => alunos.set(list),
            Err(ApiError::SessionExpired) => {}
            Err(e) => {
                log::warn!("student list failed: {e}");
                notifier.error(LOAD_FAILED_MESSAGE);
            }
        }
        is_loading.set(false);
    });

    let on_delete = move |id: i64| {
        is_loading.set(true);
        let api = services.get_value().api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_aluno(id).await {
                Ok(()) => {
                    alunos.update(|list| remove_aluno(list, id));
                    notifier.success(DELETED_MESSAGE);
                }
                Err(e) => notifier.error(delete_error_message(&e)),
            }
            confirming.set(None);
            is_loading.set(false);
        });
    };

    view! {
        <section class="page page--alunos">
            <Loading is_loading/>
            <h1>"Alunos"</h1>
            <A href="/aluno" attr:class="alunos__new">"Novo aluno"</A>
            <div class="alunos">
                <For each=move || alunos.get() key=|aluno| aluno.id let:aluno>
                    {
                        let id = aluno.id;
                        let photo = aluno.photo_url().map(str::to_owned);
                        view! {
                            <div class="alunos__row">
                                <span class="alunos__picture">
                                    {match photo {
                                        Some(url) => view! { <img src=url alt=""/> }.into_any(),
                                        None => view! { <span class="alunos__placeholder"></span> }.into_any(),
                                    }}
                                </span>
                                <span>{aluno.nome}</span>
                                <span>{aluno.email}</span>
                                <A href=edit_path(id) attr:title="Editar">"Editar"</A>
                                <Show
                                    when=move || confirming.get() == Some(id)
                                    fallback=move || view! {
                                        <a
                                            href="#"
                                            title="Excluir"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                confirming.set(Some(id));
                                            }
                                        >
                                            "Excluir"
                                        </a>
                                    }
                                >
                                    <button type="button" class="alunos__confirm" on:click=move |_| on_delete(id)>
                                        "Confirmar"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                </For>
            </div>
        </section>
    }
}
