//! Toast stack rendered in the corner of every page.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts" role="status">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <ToastItem toast toasts/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;
    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };
    view! {
        <div class=class on:click=move |_| toasts.update(|state| state.dismiss(id))>
            {toast.message}
        </div>
    }
}
