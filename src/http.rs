//! HTTP Backend
//!
//! `reqwest` bindings to the Todo/Auth API, organized like the command
//! wrappers: one function per endpoint, errors mapped at the boundary.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use todo_core::model::TodoBody;
use todo_core::{
    ApiError, ApiResult, AuthApi, Credential, Credentials, Endpoints, LoginResponse,
    RegisterResponse, TodoApi, TodoId, TodoItem, TodoPage, TodoPatch,
};

pub struct HttpBackend {
    client: Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoints: Endpoints::new(base_url),
        }
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        log::warn!("[HTTP] {}", err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        Self::send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// ========================
// Auth
// ========================

#[async_trait(?Send)]
impl AuthApi for HttpBackend {
    async fn register(&self, credentials: &Credentials) -> ApiResult<RegisterResponse> {
        let request = self.client.post(self.endpoints.register()).json(credentials);
        Self::send_json(request).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let request = self.client.post(self.endpoints.login()).json(credentials);
        Self::send_json(request).await
    }

    fn federated_login_url(&self) -> String {
        self.endpoints.google_login()
    }
}

// ========================
// Todos
// ========================

#[async_trait(?Send)]
impl TodoApi for HttpBackend {
    async fn list(&self, token: &Credential, page: u32, limit: u32) -> ApiResult<TodoPage> {
        let request = self
            .client
            .get(self.endpoints.todos_page(page, limit))
            .bearer_auth(token.as_str());
        Self::send_json(request).await
    }

    async fn create(&self, token: &Credential, patch: &TodoPatch) -> ApiResult<TodoItem> {
        let request = self
            .client
            .post(self.endpoints.todos())
            .bearer_auth(token.as_str())
            .json(&TodoBody::from(patch));
        Self::send_json(request).await
    }

    async fn update(&self, token: &Credential, id: &TodoId, patch: &TodoPatch) -> ApiResult<TodoItem> {
        let request = self
            .client
            .put(self.endpoints.todo(id))
            .bearer_auth(token.as_str())
            .json(&TodoBody::from(patch));
        Self::send_json(request).await
    }

    async fn delete(&self, token: &Credential, id: &TodoId) -> ApiResult<()> {
        let request = self
            .client
            .delete(self.endpoints.todo(id))
            .bearer_auth(token.as_str());
        Self::send(request).await.map(|_| ())
    }
}
