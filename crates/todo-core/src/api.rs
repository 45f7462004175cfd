//! Remote API Interfaces
//!
//! The Todo/Auth server is an opaque HTTP collaborator. These traits are
//! what the screens and the list synchronizer call; the browser implements
//! them over `reqwest`, tests over in-memory fakes.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::model::{Credentials, LoginResponse, RegisterResponse, TodoId, TodoItem, TodoPage, TodoPatch};
use crate::session::Credential;

#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/register`
    async fn register(&self, credentials: &Credentials) -> ApiResult<RegisterResponse>;

    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;

    /// Where the browser goes to start the federated login redirect.
    fn federated_login_url(&self) -> String;
}

/// Bearer-authenticated todo endpoints
#[async_trait(?Send)]
pub trait TodoApi {
    async fn list(&self, token: &Credential, page: u32, limit: u32) -> ApiResult<TodoPage>;

    async fn create(&self, token: &Credential, patch: &TodoPatch) -> ApiResult<TodoItem>;

    async fn update(&self, token: &Credential, id: &TodoId, patch: &TodoPatch) -> ApiResult<TodoItem>;

    async fn delete(&self, token: &Credential, id: &TodoId) -> ApiResult<()>;
}

// ========================
// Endpoint URLs
// ========================

/// URL builder for the API routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn register(&self) -> String {
        format!("{}/auth/register", self.base)
    }

    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base)
    }

    pub fn google_login(&self) -> String {
        format!("{}/login/google", self.base)
    }

    pub fn todos(&self) -> String {
        format!("{}/todos/", self.base)
    }

    pub fn todos_page(&self, page: u32, limit: u32) -> String {
        format!("{}/todos/?page={}&limit={}", self.base, page, limit)
    }

    pub fn todo(&self, id: &TodoId) -> String {
        let encoded = percent_encoding::utf8_percent_encode(id.as_str(), percent_encoding::NON_ALPHANUMERIC);
        format!("{}/todos/{}", self.base, encoded)
    }
}
