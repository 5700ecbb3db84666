//! Toast notifications shown after auth and CRUD actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Handlers and pages only fire messages; they never read them back. The
//! `ToastNotifier` pushes into an `RwSignal<ToastState>` that the `Toasts`
//! component renders.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen in the browser build.
#[cfg(feature = "csr")]
const TOAST_TTL_MS: u32 = 4_000;

/// Maximum number of toasts kept at once; older ones are dropped.
pub const MAX_TOASTS: usize = 5;

/// Fire-and-forget user notification sink.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toast queue, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.to_owned() });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Notifier backed by the reactive toast queue.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.toasts.update(|state| id = state.push(kind, message));

        #[cfg(feature = "csr")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                toasts.update(|state| state.dismiss(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        log::warn!("{message}");
        self.show(ToastKind::Error, message);
    }
}
