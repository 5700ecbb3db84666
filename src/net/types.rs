//! Wire DTOs for the student-records REST API.
//!
//! DESIGN
//! ======
//! The backend returns numeric columns either as JSON numbers or as strings
//! (decimal columns), so form-facing fields are kept as `String` and
//! deserialized leniently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `POST /login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /login` success body. Only the token is used; the user summary
/// sent next to it is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
}

/// A student photo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foto {
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// A student as returned by `GET /alunos` and `GET /alunos/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aluno {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub sobrenome: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub idade: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub peso: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub altura: String,
    /// Photos, newest first as ordered by the backend.
    #[serde(rename = "Fotos", default)]
    pub fotos: Vec<Foto>,
}

impl Aluno {
    /// URL of the current profile photo, if any.
    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        self.fotos.first().map(|f| f.url.as_str()).filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn to_form(&self) -> AlunoForm {
        AlunoForm {
            nome: self.nome.clone(),
            sobrenome: self.sobrenome.clone(),
            email: self.email.clone(),
            idade: self.idade.clone(),
            peso: self.peso.clone(),
            altura: self.altura.clone(),
        }
    }
}

/// Body of `POST /alunos` and `PUT /alunos/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlunoForm {
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub idade: String,
    pub peso: String,
    pub altura: String,
}

/// Body of `POST /users` and `PUT /users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccountForm {
    pub nome: String,
    pub email: String,
    /// Omitted on update when the user leaves it blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Error body shape: `{ "errors": ["..."] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Student photo picked in the browser, ready for multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
