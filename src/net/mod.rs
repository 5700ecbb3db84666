//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `api` the typed client with the 401
//! interceptor, and `types` the wire schema.

pub mod api;
pub mod http;
pub mod types;
