//! Test doubles for the HTTP, navigation, and notification collaborators.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedReceiver};

use crate::auth::handler::{AuthCommand, AuthHandler};
use crate::net::api::ApiClient;
use crate::net::http::{ApiRequest, ApiResponse, HttpTransport, TransportError};
use crate::routes::{NavigationState, Navigator};
use crate::state::session::SessionStore;
use crate::state::toast::Notifier;

pub const TEST_BASE_URL: &str = "http://api.test";

/// Transport that replays queued responses and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses.borrow_mut().push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pushes: Rc<RefCell<Vec<(String, Option<NavigationState>)>>>,
    current: Rc<RefCell<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        *navigator.current.borrow_mut() = path.to_owned();
        navigator
    }

    pub fn pushes(&self) -> Vec<(String, Option<NavigationState>)> {
        self.pushes.borrow().clone()
    }

    pub fn last_push(&self) -> Option<(String, Option<NavigationState>)> {
        self.pushes.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str, state: Option<&NavigationState>) {
        self.pushes.borrow_mut().push((path.to_owned(), state.cloned()));
        *self.current.borrow_mut() = path.to_owned();
    }

    fn current_path(&self) -> String {
        self.current.borrow().clone()
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    successes: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_owned());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}

/// Handler plus the collaborators a test wants to inspect.
pub struct Harness {
    pub store: SessionStore,
    pub transport: ScriptedTransport,
    pub api: Rc<ApiClient<ScriptedTransport>>,
    pub navigator: RecordingNavigator,
    pub notifier: RecordingNotifier,
    pub handler: AuthHandler<ScriptedTransport, RecordingNavigator, RecordingNotifier>,
    pub commands: futures::channel::mpsc::UnboundedSender<AuthCommand>,
    pub pending: UnboundedReceiver<AuthCommand>,
}

impl Harness {
    pub fn new() -> Self {
        Self::at("/")
    }

    pub fn at(path: &str) -> Self {
        let (commands, pending) = mpsc::unbounded();
        let store = SessionStore::new();
        let transport = ScriptedTransport::default();
        let api = Rc::new(ApiClient::new(transport.clone(), TEST_BASE_URL, commands.clone()));
        let navigator = RecordingNavigator::at(path);
        let notifier = RecordingNotifier::default();
        let handler = AuthHandler::new(store.clone(), Rc::clone(&api), navigator.clone(), notifier.clone());
        Self { store, transport, api, navigator, notifier, handler, commands, pending }
    }

    /// Run every queued command through the handler, like the auth task would.
    pub async fn drain(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(command) = self.pending.try_recv() {
            let _ = self.handler.handle(command).await;
            processed += 1;
        }
        processed
    }
}
