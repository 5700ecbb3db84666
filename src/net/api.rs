//! REST API client for the student-records backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page call goes through `ApiClient`, which attaches the bearer
//! credential and intercepts responses. A 401 from any endpoint other than
//! `/login` is reported on the auth channel as `SessionExpired`, so session
//! invalidation has a single entry point shared with explicit logout.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are all converted to `ApiError`
//! here; pages only decide which message to show.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;

use futures::channel::mpsc::UnboundedSender;
use serde::de::DeserializeOwned;

use super::http::{ApiRequest, ApiResponse, FormPart, HttpTransport, Method, RequestBody, TransportError};
use super::types::{AccountForm, Aluno, AlunoForm, ErrorBody, LoginRequest, LoginResponse, PhotoFile};
use crate::auth::handler::AuthCommand;

/// Shown when the backend gives no specific reason.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Erro desconhecido";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("session expired")]
    SessionExpired,
    #[error("request rejected with status {status}")]
    Rejected { status: u16, errors: Vec<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status behind the error, when there was a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SessionExpired => Some(401),
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// User-facing messages: the backend's `errors` list, or a generic one.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Rejected { errors, .. } if !errors.is_empty() => errors.clone(),
            _ => vec![UNKNOWN_ERROR_MESSAGE.to_owned()],
        }
    }
}

pub(crate) fn bearer_header(credential: &str) -> String {
    format!("Bearer {credential}")
}

pub(crate) fn aluno_endpoint(id: i64) -> String {
    format!("/alunos/{id}")
}

fn rejected(response: &ApiResponse) -> ApiError {
    let errors = serde_json::from_str::<ErrorBody>(&response.body)
        .map(|body| body.errors)
        .unwrap_or_default();
    ApiError::Rejected { status: response.status, errors }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// HTTP client with a mutable default `Authorization` header.
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    bearer: RefCell<Option<String>>,
    auth_events: UnboundedSender<AuthCommand>,
}

impl<T: HttpTransport> ApiClient<T> {
    #[must_use]
    pub fn new(transport: T, base_url: impl Into<String>, auth_events: UnboundedSender<AuthCommand>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { transport, base_url, bearer: RefCell::new(None), auth_events }
    }

    /// Replace (or clear) the credential sent with every later request.
    pub fn set_bearer(&self, credential: Option<String>) {
        *self.bearer.borrow_mut() = credential.filter(|c| !c.is_empty());
    }

    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.bearer.borrow().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        let request = ApiRequest::new(method, self.url(path));
        match self.bearer.borrow().as_deref() {
            Some(credential) => request.header("Authorization", bearer_header(credential)),
            None => request,
        }
    }

    /// Send through the 401 interceptor and require a 2xx status.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let sent_with = request
            .header_value("Authorization")
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);
        let response = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("{} {url} failed: {e}", method.as_str());
        })?;

        if response.status == 401 {
            log::info!("{} {url} returned 401, expiring session", method.as_str());
            let expired = AuthCommand::SessionExpired { credential: sent_with };
            if self.auth_events.unbounded_send(expired).is_err() {
                log::warn!("auth channel closed; session expiry dropped");
            }
            return Err(ApiError::SessionExpired);
        }
        if !response.ok() {
            log::warn!("{} {url} returned {}", method.as_str(), response.status);
            return Err(rejected(&response));
        }
        Ok(response)
    }

    /// `POST /login`. Bypasses the 401 interceptor: bad credentials are a
    /// login failure, not an expired session.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status, or undecodable body.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = serde_json::to_value(LoginRequest { email, password }).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest::new(Method::Post, self.url("/login")).body(RequestBody::Json(payload));
        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(rejected(&response));
        }
        decode(&response)
    }

    /// `GET /alunos`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_alunos(&self) -> Result<Vec<Aluno>, ApiError> {
        let response = self.send(self.request(Method::Get, "/alunos")).await?;
        decode(&response)
    }

    /// `GET /alunos/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_aluno(&self, id: i64) -> Result<Aluno, ApiError> {
        let response = self.send(self.request(Method::Get, &aluno_endpoint(id))).await?;
        decode(&response)
    }

    /// `POST /alunos`, returning the created record.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_aluno(&self, form: &AlunoForm) -> Result<Aluno, ApiError> {
        let body = json_body(form)?;
        let response = self.send(self.request(Method::Post, "/alunos").body(body)).await?;
        decode(&response)
    }

    /// `PUT /alunos/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_aluno(&self, id: i64, form: &AlunoForm) -> Result<(), ApiError> {
        let body = json_body(form)?;
        self.send(self.request(Method::Put, &aluno_endpoint(id)).body(body)).await?;
        Ok(())
    }

    /// `DELETE /alunos/:id`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_aluno(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.request(Method::Delete, &aluno_endpoint(id))).await?;
        Ok(())
    }

    /// `POST /upload` as multipart `aluno_id` + `foto`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn upload_foto(&self, aluno_id: i64, photo: PhotoFile) -> Result<(), ApiError> {
        let parts = vec![
            FormPart::Text { name: "aluno_id".to_owned(), value: aluno_id.to_string() },
            FormPart::File {
                name: "foto".to_owned(),
                file_name: photo.file_name,
                content_type: photo.content_type,
                bytes: photo.bytes,
            },
        ];
        let request = self.request(Method::Post, "/upload").body(RequestBody::Multipart(parts));
        self.send(request).await?;
        Ok(())
    }

    /// `POST /users` (sign up).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_account(&self, form: &AccountForm) -> Result<(), ApiError> {
        let body = json_body(form)?;
        self.send(self.request(Method::Post, "/users").body(body)).await?;
        Ok(())
    }

    /// `PUT /users` (update the logged-in account).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_account(&self, form: &AccountForm) -> Result<(), ApiError> {
        let body = json_body(form)?;
        self.send(self.request(Method::Put, "/users").body(body)).await?;
        Ok(())
    }
}

fn json_body<S: serde::Serialize>(value: &S) -> Result<RequestBody, ApiError> {
    serde_json::to_value(value)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
