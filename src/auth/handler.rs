//! Auth transition handler: login, logout, rehydration, forced expiry.
//!
//! ARCHITECTURE
//! ============
//! UI code holds an `AuthHandle` and sends `AuthCommand`s; the API client's
//! 401 interceptor sends on the same channel. One `AuthHandler::run` task
//! drains the channel, so session transitions are applied one at a time and
//! each login's outcome lands after its HTTP response and before the
//! resulting navigation.
//!
//! TRADE-OFFS
//! ==========
//! There is no cancellation. A login response that arrives after the user
//! navigated elsewhere is still applied. A second login submitted while one
//! is in flight is rejected up front instead of queued.

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;

use std::rc::Rc;

use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::net::api::ApiClient;
use crate::net::http::HttpTransport;
use crate::routes::{LOGIN_PATH, NavigationState, Navigator, Page, match_route};
use crate::state::session::{LoginIntent, SessionEvent, SessionStore};
use crate::state::toast::Notifier;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Você está logado";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Usuário ou senha inválidos.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Você precisa fazer login novamente";

/// Work items for the auth task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCommand {
    Login(LoginIntent),
    Logout,
    /// A request answered 401. `credential` is the bearer it was sent with.
    SessionExpired { credential: Option<String> },
}

impl AuthCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::Logout => "logout",
            Self::SessionExpired { .. } => "session_expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    AuthenticationRejected,
    #[error("session expired")]
    SessionExpired,
    #[error("a login request is already in flight")]
    LoginInProgress,
    #[error("auth channel closed")]
    ChannelClosed,
}

/// Cheap-clone entry point for pages and components.
#[derive(Clone, Debug)]
pub struct AuthHandle {
    store: SessionStore,
    commands: UnboundedSender<AuthCommand>,
}

impl AuthHandle {
    #[must_use]
    pub fn new(store: SessionStore, commands: UnboundedSender<AuthCommand>) -> Self {
        Self { store, commands }
    }

    /// Start a login attempt.
    ///
    /// # Errors
    ///
    /// `LoginInProgress` while another attempt is outstanding; `ChannelClosed`
    /// if the auth task is gone (the loading flag is rolled back).
    pub fn submit_login(&self, intent: LoginIntent) -> Result<(), AuthError> {
        if self.store.snapshot().is_loading() {
            log::info!("login ignored: another attempt is in flight");
            return Err(AuthError::LoginInProgress);
        }
        self.store.dispatch(SessionEvent::LoginRequested(intent.clone()));
        self.send(AuthCommand::Login(intent)).inspect_err(|_| {
            self.store.dispatch(SessionEvent::LoginFailed);
        })
    }

    /// Log out and return to the login page.
    ///
    /// # Errors
    ///
    /// `ChannelClosed` if the auth task is gone.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.send(AuthCommand::Logout)
    }

    fn send(&self, command: AuthCommand) -> Result<(), AuthError> {
        self.commands.unbounded_send(command).map_err(|_| {
            log::error!("auth channel closed");
            AuthError::ChannelClosed
        })
    }
}

/// Owns the side effects of session transitions.
pub struct AuthHandler<T, N, M> {
    store: SessionStore,
    api: Rc<ApiClient<T>>,
    navigator: N,
    notifier: M,
}

impl<T, N, M> AuthHandler<T, N, M>
where
    T: HttpTransport,
    N: Navigator,
    M: Notifier,
{
    pub fn new(store: SessionStore, api: Rc<ApiClient<T>>, navigator: N, notifier: M) -> Self {
        Self { store, api, navigator, notifier }
    }

    /// Apply a restored credential at startup, before any page renders.
    pub fn rehydrate(&self, credential: Option<String>) {
        let credential = credential.unwrap_or_default();
        let session = self.store.dispatch(SessionEvent::Rehydrated(credential));
        if let Some(credential) = session.credential() {
            self.api.set_bearer(Some(credential.to_owned()));
            log::info!("session restored from storage");
        }
    }

    /// Process commands until every sender is dropped.
    pub async fn run(self, mut commands: UnboundedReceiver<AuthCommand>) {
        while let Some(command) = commands.next().await {
            if let Err(e) = self.handle(command).await {
                log::info!("auth transition ended: {e}");
            }
        }
        log::warn!("auth task stopped");
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// `AuthenticationRejected` for a failed login and `SessionExpired` for an
    /// applied expiry. Neither is fatal; both are already surfaced to the user.
    pub async fn handle(&self, command: AuthCommand) -> Result<(), AuthError> {
        log::debug!("auth command {}", command.name());
        match command {
            AuthCommand::Login(intent) => self.login(intent).await,
            AuthCommand::Logout => {
                self.logout();
                Ok(())
            }
            AuthCommand::SessionExpired { credential } => self.expire(credential),
        }
    }

    async fn login(&self, intent: LoginIntent) -> Result<(), AuthError> {
        if !self.store.snapshot().is_loading() {
            self.store.dispatch(SessionEvent::LoginRequested(intent.clone()));
        }

        let token = match self.api.login(&intent.email, &intent.password).await {
            Ok(resp) if !resp.token.is_empty() => resp.token,
            Ok(_) => {
                log::warn!("login response carried no token");
                return Err(self.reject_login());
            }
            Err(e) => {
                log::info!("login rejected: {e}");
                return Err(self.reject_login());
            }
        };

        self.store.dispatch(SessionEvent::LoginSucceeded(token.clone()));
        self.api.set_bearer(Some(token));
        self.notifier.success(LOGIN_SUCCESS_MESSAGE);
        log::info!("logged in, returning to {}", intent.return_path);
        self.navigator.push(&intent.return_path, None);
        Ok(())
    }

    fn reject_login(&self) -> AuthError {
        self.notifier.error(INVALID_CREDENTIALS_MESSAGE);
        self.store.dispatch(SessionEvent::LoginFailed);
        AuthError::AuthenticationRejected
    }

    fn logout(&self) {
        self.store.dispatch(SessionEvent::LoginFailed);
        self.api.set_bearer(None);
        log::info!("logged out");
        self.navigator.push(LOGIN_PATH, None);
    }

    /// Every non-login 401 ends the session. Only the toast and the redirect
    /// depend on a session having been active.
    fn expire(&self, sent_with: Option<String>) -> Result<(), AuthError> {
        let before = self.store.snapshot();
        if sent_with.as_deref() != before.credential() {
            log::debug!("401 for a request sent with a different credential");
        }

        self.store.dispatch(SessionEvent::LoginFailed);
        self.api.set_bearer(None);
        if !before.is_logged_in() {
            return Ok(());
        }
        log::info!("session expired");
        self.notifier.error(SESSION_EXPIRED_MESSAGE);
        let current = self.navigator.current_path();
        if match_route(&current).route.page != Page::Login {
            let state = NavigationState { return_path: current };
            self.navigator.push(LOGIN_PATH, Some(&state));
        }
        Err(AuthError::SessionExpired)
    }
}
