//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (header, toasts, loading overlay) and the
//! login guard, reading shared state from Leptos context providers.

pub mod form_field;
pub mod guard;
pub mod header;
pub mod loading;
pub mod toasts;
