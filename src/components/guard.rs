//! Login guard wrapped around every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates `admit_location` whenever the location or the session
//! changes. Protected pages never render for a logged-out session; the user
//! is sent to `/login` with the requested path as `returnPath`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_session;
use crate::routes::{Decision, admit_location, with_return_path};

#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| admit_location(&location.pathname.get(), &session.get()));

    Effect::new(move || {
        if let Decision::Redirect { to, state } = decision.get() {
            log::info!("guard: {} requires login", state.return_path);
            navigate(&with_return_path(to, &state.return_path), NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        <Show when=move || decision.get() == Decision::Render>
            {children()}
        </Show>
    }
}
