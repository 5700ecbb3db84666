//! Top navigation bar.
//!
//! Home and register links are always shown; the third link is login or
//! logout depending on the session, followed by a logged-in indicator.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{use_services, use_session};
use crate::routes::{HOME_PATH, LOGIN_PATH};

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let services = use_services();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Err(e) = services.get_value().auth.logout() {
            log::error!("logout failed: {e}");
        }
    };

    view! {
        <nav class="header">
            <A href=HOME_PATH attr:class="header__link" attr:title="Início">"Início"</A>
            <A href="/register" attr:class="header__link" attr:title="Cadastro">"Cadastro"</A>
            <Show
                when=move || session.get().is_logged_in()
                fallback=|| view! { <A href=LOGIN_PATH attr:class="header__link">"Entrar"</A> }
            >
                <a href="/logout" class="header__link" on:click=on_logout>"Sair"</a>
                <span class="header__online" title="Logado"></span>
            </Show>
        </nav>
    }
}
