use tracing::{debug, info};

use taskdesk_api::TaskApi;
use taskdesk_model::{
    LoginForm, Session, Task, TaskFilter, TaskForm, TaskId, User, filter, validate,
    validate_credentials,
};

use crate::error::DeskError;
use crate::session::SessionStore;

/// Everything a signed-in user can do, bound to one API and one session store.
///
/// Forms are always validated before any request is sent; a form with field errors
/// never reaches the API.
pub struct TaskDesk<A, S> {
    api: A,
    store: S,
}

impl<A, S> TaskDesk<A, S>
where
    A: TaskApi,
    S: SessionStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate the login form, authenticate, and persist the new session.
    pub async fn login(&self, form: &LoginForm) -> Result<Session, DeskError> {
        let credentials = validate_credentials(form)?;
        let session = self.api.login(&credentials).await?;
        self.store.save(&session)?;

        info!(user_id = %session.user.id, email = %session.user.email, "signed in");
        Ok(session)
    }

    /// Drop the stored session. Returns the user that was signed in, if any.
    pub fn logout(&self) -> Result<Option<User>, DeskError> {
        let user = self.store.current_user()?;
        self.store.clear()?;

        if let Some(user) = &user {
            info!(user_id = %user.id, "signed out");
        }
        Ok(user)
    }

    pub fn current_user(&self) -> Result<Option<User>, DeskError> {
        Ok(self.store.current_user()?)
    }

    fn session(&self) -> Result<Session, DeskError> {
        self.store.load()?.ok_or(DeskError::NotSignedIn)
    }

    /// All tasks narrowed by `criteria`, in the order the API returned them.
    pub async fn list_tasks(&self, criteria: &TaskFilter) -> Result<Vec<Task>, DeskError> {
        let session = self.session()?;
        let tasks = self.api.list_tasks(&session.access_token).await?;
        let shown = filter(&tasks, criteria);

        debug!(fetched = tasks.len(), shown = shown.len(), "listed tasks");
        Ok(shown)
    }

    /// Tasks assigned to the signed-in user.
    pub async fn my_tasks(&self) -> Result<Vec<Task>, DeskError> {
        let session = self.session()?;
        let tasks = self
            .api
            .list_tasks_by_assignee(&session.access_token, session.user.id)
            .await?;
        Ok(tasks)
    }

    pub async fn get_task(&self, id: TaskId) -> Result<Task, DeskError> {
        let session = self.session()?;
        Ok(self.api.get_task(&session.access_token, id).await?)
    }

    /// Fetch a task and turn it into a pre-filled edit form.
    pub async fn edit_form(&self, id: TaskId) -> Result<TaskForm, DeskError> {
        let task = self.get_task(id).await?;
        Ok(TaskForm::from(&task))
    }

    pub async fn create_task(&self, form: &TaskForm) -> Result<Task, DeskError> {
        let session = self.session()?;
        let draft = validate(form)?;
        let task = self.api.create_task(&session.access_token, &draft).await?;

        info!(task_id = %task.id, title = %task.title, "task created");
        Ok(task)
    }

    pub async fn update_task(&self, id: TaskId, form: &TaskForm) -> Result<Task, DeskError> {
        let session = self.session()?;
        let draft = validate(form)?;
        let task = self.api.update_task(&session.access_token, id, &draft).await?;

        info!(task_id = %task.id, "task updated");
        Ok(task)
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<TaskId, DeskError> {
        let session = self.session()?;
        self.api.delete_task(&session.access_token, id).await?;

        info!(task_id = %id, "task deleted");
        Ok(id)
    }
}
