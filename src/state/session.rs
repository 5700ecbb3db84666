//! Session store: login status, in-flight flag, and bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the only writer of `Session`. The auth handler dispatches
//! transition events; the persistence bridge and the reactive UI mirror
//! subscribe to snapshots after every dispatch.
//!
//! DESIGN
//! ======
//! `Session::apply` is a plain reducer so transitions are testable without a
//! browser. `SessionStore` is a cheap-clone handle over one shared session;
//! the app is single-threaded, so `Rc<RefCell<_>>` is enough.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Data captured by the login form for one attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginIntent {
    pub email: String,
    pub password: String,
    /// Where to navigate once the login succeeds.
    pub return_path: String,
}

/// Authentication state for the current browser user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    is_logged_in: bool,
    is_loading: bool,
    credential: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// True while a login request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Whether the credential/login-flag pairing holds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let has_credential = self.credential.as_deref().is_some_and(|c| !c.is_empty());
        has_credential == self.is_logged_in
    }

    /// Apply one transition event in place.
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::LoginRequested(_) => {
                self.is_loading = true;
            }
            SessionEvent::LoginSucceeded(credential) if !credential.is_empty() => {
                self.is_logged_in = true;
                self.credential = Some(credential.clone());
                self.is_loading = false;
            }
            SessionEvent::LoginSucceeded(_) | SessionEvent::LoginFailed => {
                self.is_logged_in = false;
                self.credential = None;
                self.is_loading = false;
            }
            SessionEvent::Rehydrated(credential) => {
                if !credential.is_empty() {
                    self.is_logged_in = true;
                    self.credential = Some(credential.clone());
                }
            }
        }
    }
}

/// The transitions the session store accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    LoginRequested(LoginIntent),
    LoginSucceeded(String),
    LoginFailed,
    Rehydrated(String),
}

impl SessionEvent {
    /// Short name for logs; never includes the credential.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginRequested(_) => "login_requested",
            Self::LoginSucceeded(_) => "login_succeeded",
            Self::LoginFailed => "login_failed",
            Self::Rehydrated(_) => "rehydrated",
        }
    }
}

type Listener = Rc<dyn Fn(&Session)>;

/// Shared handle to the single application session.
#[derive(Clone, Default)]
pub struct SessionStore {
    session: Rc<RefCell<Session>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Apply `event`, notify subscribers, and return the resulting snapshot.
    pub fn dispatch(&self, event: SessionEvent) -> Session {
        let next = {
            let mut session = self.session.borrow_mut();
            session.apply(&event);
            session.clone()
        };
        log::debug!(
            "session {}: logged_in={} loading={}",
            event.name(),
            next.is_logged_in(),
            next.is_loading()
        );

        // Listeners may dispatch or subscribe themselves; iterate a copy.
        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(&next);
        }
        next
    }

    /// Register `listener` to receive every snapshot produced by `dispatch`.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
