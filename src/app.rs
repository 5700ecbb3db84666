//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wires the auth core together once per page load: the session store,
//! the API client with its 401 interceptor, the auth command channel, and the
//! persistence bridge. The handler needs the router's navigation hooks, so it
//! is started by `AuthRuntime` inside `<Router>`, before any route renders.
//!
//! DESIGN
//! ======
//! The session store is the source of truth; `RwSignal<Session>` mirrors it
//! for views. Non-`Send` services live in a local `StoredValue`, which is
//! `Copy` and can be captured by view closures.

use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedReceiver};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::handler::{AuthCommand, AuthHandle, AuthHandler};
use crate::auth::persistence::CredentialBridge;
use crate::components::guard::Guarded;
use crate::components::header::Header;
use crate::components::toasts::Toasts;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    aluno::AlunoPage, alunos::AlunosPage, fotos::FotosPage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage,
};
use crate::routes::RouterNavigator;
use crate::state::session::{Session, SessionStore};
use crate::state::toast::{ToastNotifier, ToastState};
use crate::util::storage::BrowserStorage;

#[cfg(feature = "csr")]
pub type DefaultTransport = crate::net::http::BrowserTransport;
#[cfg(not(feature = "csr"))]
pub type DefaultTransport = crate::net::http::OfflineTransport;

/// Shared services for pages and components.
pub struct AppServices {
    pub store: SessionStore,
    pub api: Rc<ApiClient<DefaultTransport>>,
    pub auth: AuthHandle,
}

pub type Services = StoredValue<Rc<AppServices>, LocalStorage>;

/// Services handle provided by `App`.
pub fn use_services() -> Services {
    expect_context::<Services>()
}

/// Toast sink bound to the app's toast queue.
pub fn use_notifier() -> ToastNotifier {
    ToastNotifier::new(expect_context::<RwSignal<ToastState>>())
}

/// Reactive mirror of the session store.
pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}

/// Pieces consumed once when the auth task starts.
struct RuntimeParts {
    commands: UnboundedReceiver<AuthCommand>,
    bridge: CredentialBridge<BrowserStorage>,
}

/// Root application component.
#[component]
pub fn App(#[prop(optional)] config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    let store = SessionStore::new();
    store.subscribe(move |next| session.set(next.clone()));

    let (tx, rx) = mpsc::unbounded();
    let api = Rc::new(ApiClient::new(DefaultTransport::default(), config.api_base_url.clone(), tx.clone()));
    let services = Rc::new(AppServices { store: store.clone(), api, auth: AuthHandle::new(store, tx) });
    provide_context::<Services>(StoredValue::new_local(services));

    let parts = StoredValue::new_local(Some(RuntimeParts {
        commands: rx,
        bridge: CredentialBridge::new(BrowserStorage, config.storage_key.clone()),
    }));

    view! {
        <Title text="Cadastro de Alunos"/>

        <Router>
            <AuthRuntime parts/>
            <Header/>
            <main class="container">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Guarded><AlunosPage/></Guarded> }/>
                    <Route
                        path=(StaticSegment("aluno"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <Guarded><AlunoPage/></Guarded> }
                    />
                    <Route path=StaticSegment("aluno") view=|| view! { <Guarded><AlunoPage/></Guarded> }/>
                    <Route
                        path=(StaticSegment("fotos"), ParamSegment("id"))
                        view=|| view! { <Guarded><FotosPage/></Guarded> }
                    />
                    <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                    <Route path=StaticSegment("register") view=|| view! { <Guarded><RegisterPage/></Guarded> }/>
                </Routes>
            </main>
            <Toasts/>
        </Router>
    }
}

/// Rehydrates the session and starts the auth task. Renders nothing.
#[component]
fn AuthRuntime(parts: StoredValue<Option<RuntimeParts>, LocalStorage>) -> impl IntoView {
    let mut taken = None;
    parts.update_value(|slot| taken = slot.take());
    let Some(RuntimeParts { commands, bridge }) = taken else {
        return;
    };

    let services = use_services().get_value();
    let location = use_location();
    let navigator = RouterNavigator::new(use_navigate(), location.pathname);
    let handler = AuthHandler::new(services.store.clone(), services.api.clone(), navigator, use_notifier());

    handler.rehydrate(bridge.restore());
    bridge.attach(&services.store);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(handler.run(commands));
    #[cfg(not(feature = "csr"))]
    {
        let _ = (handler, commands);
    }
}
