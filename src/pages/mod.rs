//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page is mounted by `app::App` inside the login guard. Pages call the
//! shared `ApiClient`; a 401 is already handled by the auth task, so pages
//! only report the other failures.

pub mod aluno;
pub mod alunos;
pub mod fotos;
pub mod login;
pub mod not_found;
pub mod register;
