//! Authentication flow: the transition handler and credential persistence.
//!
//! ARCHITECTURE
//! ============
//! `handler` turns login/logout/expiry commands into session transitions and
//! side effects; `persistence` restores and saves the credential around them.

pub mod handler;
pub mod persistence;
