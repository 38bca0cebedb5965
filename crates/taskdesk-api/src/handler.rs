use async_trait::async_trait;
use taskdesk_model::{AccessToken, Credentials, Session, Task, TaskDraft, TaskId, UserId};

use crate::error::ApiError;

/// Operations offered by the remote task API.
///
/// Callers validate input before calling any of these; implementations never validate.
/// Every call except [`TaskApi::login`] is authenticated with the session's bearer token.
#[async_trait]
pub trait TaskApi: Send + Sync + 'static {
    /// Exchange credentials for a session.
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    async fn list_tasks(&self, token: &AccessToken) -> Result<Vec<Task>, ApiError>;

    async fn get_task(&self, token: &AccessToken, id: TaskId) -> Result<Task, ApiError>;

    async fn create_task(&self, token: &AccessToken, draft: &TaskDraft) -> Result<Task, ApiError>;

    async fn update_task(
        &self,
        token: &AccessToken,
        id: TaskId,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError>;

    async fn delete_task(&self, token: &AccessToken, id: TaskId) -> Result<(), ApiError>;

    /// Tasks whose `assignee_id` is `assignee`.
    async fn list_tasks_by_assignee(
        &self,
        token: &AccessToken,
        assignee: UserId,
    ) -> Result<Vec<Task>, ApiError>;
}
