//! Full-screen busy overlay.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] is_loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || is_loading.get()>
            <div class="loading">
                <div class="loading__backdrop"></div>
                <span class="loading__label">"Carregando..."</span>
            </div>
        </Show>
    }
}
