//! Helpers without a UI of their own.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` hides `localStorage` behind a trait for the persistence bridge;
//! `validate` holds the form checks pages run before sending anything.

pub mod storage;
pub mod validate;
