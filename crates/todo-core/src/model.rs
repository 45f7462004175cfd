//! Client Models
//!
//! Data structures matching the remote Todo/Auth API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Server-assigned todo identifier.
///
/// The API is free to send ids as JSON numbers or strings; both decode to
/// the same value so equality and dedup work regardless of encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for TodoId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => TodoId(n.to_string()),
            RawId::Text(s) => TodoId(s),
        })
    }
}

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}

impl TodoItem {
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.map(str::to_string),
        }
    }

    /// Applies the mutable fields of `patch`. The id never changes.
    pub fn apply(&mut self, patch: &TodoPatch) {
        self.title = patch.title.clone();
        self.description = patch.description.clone();
    }
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Title/description payload for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: String,
    pub description: Option<String>,
}

impl TodoPatch {
    /// Validates form input: the title must be non-empty after trimming.
    pub fn new(title: &str, description: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Required("Title"));
        }
        let description = description.trim();
        Ok(Self {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// Wire body for `POST /todos/` and `PUT /todos/{id}`
#[derive(Serialize)]
pub struct TodoBody<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a TodoPatch> for TodoBody<'a> {
    fn from(patch: &'a TodoPatch) -> Self {
        Self {
            title: &patch.title,
            description: patch.description.as_deref().unwrap_or_default(),
        }
    }
}

/// One page of `GET /todos/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoPage {
    #[serde(default)]
    pub todos: Vec<TodoItem>,
    #[serde(rename = "hasMore", default)]
    pub has_more: bool,
}

/// Email/password pair for register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::Required("Email"));
        }
        if password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}
