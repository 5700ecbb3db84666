//! Client-side state: the auth session and the toast queue.
//!
//! DESIGN
//! ======
//! `session` is plain Rust with its own subscriber list so the auth core can
//! be tested without a reactive runtime. `toast` is signal-backed because
//! only views read it.

pub mod session;
pub mod toast;
