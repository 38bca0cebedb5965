use serde::{Deserialize, Serialize};

use super::{TaskDate, TaskId, TaskPriority, TaskStatus, UserId};

/// A task as stored by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the API, never changes.
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: TaskDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<TaskDate>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
}

/// A validated task body without an identifier.
///
/// This is what create and update requests carry. Produced by [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: TaskDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<TaskDate>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
}

impl Task {
    /// Attach an identifier to a draft.
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            start_date: draft.start_date,
            due_date: draft.due_date,
            status: draft.status,
            priority: draft.priority,
            assignee_id: draft.assignee_id,
        }
    }

    /// The body of this task, without its identifier.
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            due_date: self.due_date,
            status: self.status,
            priority: self.priority,
            assignee_id: self.assignee_id,
        }
    }

    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.assignee_id == Some(user)
    }
}

/// Anything that carries a status and a priority and can therefore be filtered.
pub trait Classified {
    fn status(&self) -> TaskStatus;
    fn priority(&self) -> TaskPriority;
}

impl Classified for Task {
    fn status(&self) -> TaskStatus {
        self.status
    }
    fn priority(&self) -> TaskPriority {
        self.priority
    }
}

impl Classified for TaskDraft {
    fn status(&self) -> TaskStatus {
        self.status
    }
    fn priority(&self) -> TaskPriority {
        self.priority
    }
}
