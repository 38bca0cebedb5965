use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, header::ACCEPT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use taskdesk_model::{AccessToken, Credentials, Session, Task, TaskDraft, TaskId, UserId};

use crate::{config::ApiConfig, error::ApiError, handler::TaskApi, wire::LoginResponse};

/// [`TaskApi`] over HTTP/JSON.
///
/// Routes:
/// - POST   /auth/login
/// - GET    /workspaces/tasks
/// - POST   /workspaces/tasks
/// - GET    /workspaces/tasks/{id}
/// - PATCH  /workspaces/tasks/{id}
/// - DELETE /workspaces/tasks/{id}
/// - GET    /workspaces/tasks/assignee/{id}
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&AccessToken>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "sending api request");

        let request = self.client.request(method, url).header(ACCEPT, "application/json");
        match token {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }
}

async fn expect_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), "api rejected request");
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = expect_success(response).await?.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ApiError::Decode(format!("failed to parse response: {e}, body: {body}")))
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let response = self
            .request(Method::POST, "/auth/login", None)
            .json(credentials)
            .send()
            .await?;
        let login: LoginResponse = decode(response).await?;
        Ok(login.into())
    }

    async fn list_tasks(&self, token: &AccessToken) -> Result<Vec<Task>, ApiError> {
        let response = self
            .request(Method::GET, "/workspaces/tasks", Some(token))
            .send()
            .await?;
        decode(response).await
    }

    async fn get_task(&self, token: &AccessToken, id: TaskId) -> Result<Task, ApiError> {
        let response = self
            .request(Method::GET, &format!("/workspaces/tasks/{id}"), Some(token))
            .send()
            .await?;
        decode(response).await
    }

    async fn create_task(&self, token: &AccessToken, draft: &TaskDraft) -> Result<Task, ApiError> {
        let response = self
            .request(Method::POST, "/workspaces/tasks", Some(token))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_task(
        &self,
        token: &AccessToken,
        id: TaskId,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError> {
        let response = self
            .request(Method::PATCH, &format!("/workspaces/tasks/{id}"), Some(token))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_task(&self, token: &AccessToken, id: TaskId) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/workspaces/tasks/{id}"), Some(token))
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    async fn list_tasks_by_assignee(
        &self,
        token: &AccessToken,
        assignee: UserId,
    ) -> Result<Vec<Task>, ApiError> {
        let response = self
            .request(
                Method::GET,
                &format!("/workspaces/tasks/assignee/{assignee}"),
                Some(token),
            )
            .send()
            .await?;
        decode(response).await
    }
}
