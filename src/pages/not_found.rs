use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1>"Página não encontrada"</h1>
            <A href=HOME_PATH>"Voltar para o início"</A>
        </section>
    }
}
