use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldErrors;
use crate::{Task, TaskDate, TaskDraft, TaskPriority, TaskStatus, UserId};

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;

/// Fields of the task form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    Title,
    Description,
    StartDate,
    DueDate,
    Status,
    Priority,
    AssigneeId,
}

impl TaskField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Title => "title",
            TaskField::Description => "description",
            TaskField::StartDate => "start_date",
            TaskField::DueDate => "due_date",
            TaskField::Status => "status",
            TaskField::Priority => "priority",
            TaskField::AssigneeId => "assignee_id",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Raw, unvalidated values of the task form. Empty strings mean "not filled in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub due_date: String,
    pub status: String,
    pub priority: String,
    pub assignee_id: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start_date: String::new(),
            due_date: String::new(),
            status: TaskStatus::default().as_str().to_string(),
            priority: TaskPriority::default().as_str().to_string(),
            assignee_id: String::new(),
        }
    }
}

impl TaskForm {
    pub fn new(title: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_date: start_date.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = assignee_id.into();
        self
    }

    pub fn validate(&self) -> ValidationResult {
        validate(self)
    }
}

impl From<&TaskDraft> for TaskForm {
    fn from(draft: &TaskDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone().unwrap_or_default(),
            start_date: draft.start_date.to_string(),
            due_date: draft.due_date.map(|d| d.to_string()).unwrap_or_default(),
            status: draft.status.as_str().to_string(),
            priority: draft.priority.as_str().to_string(),
            assignee_id: draft.assignee_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

/// Pre-fill the edit form from a stored task.
impl From<&Task> for TaskForm {
    fn from(task: &Task) -> Self {
        TaskForm::from(&task.to_draft())
    }
}

pub type ValidationResult = Result<TaskDraft, FieldErrors<TaskField>>;

/// Check every field of `form` and either normalize it into a [`TaskDraft`] or report
/// one message for each invalid field.
///
/// Rules never short-circuit across fields. The only cross-field rule, due date not
/// before start date, is skipped while the start date is itself missing or invalid.
pub fn validate(form: &TaskForm) -> ValidationResult {
    let mut errors = FieldErrors::new();

    let title = check(&mut errors, TaskField::Title, title(&form.title));
    let description = check(&mut errors, TaskField::Description, description(&form.description));
    let start_date = check(&mut errors, TaskField::StartDate, start_date(&form.start_date));
    let due_date = check(&mut errors, TaskField::DueDate, due_date(&form.due_date, start_date));
    let status = check(&mut errors, TaskField::Status, status(&form.status));
    let priority = check(&mut errors, TaskField::Priority, priority(&form.priority));
    let assignee_id = check(&mut errors, TaskField::AssigneeId, assignee_id(&form.assignee_id));

    match (title, description, start_date, due_date, status, priority, assignee_id) {
        (
            Some(title),
            Some(description),
            Some(start_date),
            Some(due_date),
            Some(status),
            Some(priority),
            Some(assignee_id),
        ) => errors.into_result(TaskDraft {
            title,
            description,
            start_date,
            due_date,
            status,
            priority,
            assignee_id,
        }),
        _ => Err(errors),
    }
}

type Rule<T> = Result<T, &'static str>;

fn check<T>(errors: &mut FieldErrors<TaskField>, field: TaskField, rule: Rule<T>) -> Option<T> {
    match rule {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

fn title(raw: &str) -> Rule<String> {
    let len = raw.chars().count();
    if len == 0 {
        return Err("Title is required");
    }
    if len < TITLE_MIN {
        return Err("Title must be at least 3 characters");
    }
    if len > TITLE_MAX {
        return Err("Title must be less than 100 characters");
    }
    Ok(raw.to_string())
}

fn description(raw: &str) -> Rule<Option<String>> {
    if raw.chars().count() > DESCRIPTION_MAX {
        return Err("Description must be less than 500 characters");
    }
    Ok((!raw.is_empty()).then(|| raw.to_string()))
}

fn start_date(raw: &str) -> Rule<TaskDate> {
    if raw.is_empty() {
        return Err("Start date is required");
    }
    TaskDate::parse(raw).map_err(|_| "Please enter a valid date")
}

fn due_date(raw: &str, start: Option<TaskDate>) -> Rule<Option<TaskDate>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let due = TaskDate::parse(raw).map_err(|_| "Please enter a valid date")?;
    match start {
        Some(start) if due < start => Err("Due date must be after start date"),
        _ => Ok(Some(due)),
    }
}

fn status(raw: &str) -> Rule<TaskStatus> {
    if raw.is_empty() {
        return Err("Status is required");
    }
    raw.parse().map_err(|_| "Please select a valid status")
}

fn priority(raw: &str) -> Rule<TaskPriority> {
    if raw.is_empty() {
        return Err("Priority is required");
    }
    raw.parse().map_err(|_| "Please select a valid priority")
}

fn assignee_id(raw: &str) -> Rule<Option<UserId>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .ok()
        .and_then(UserId::new)
        .map(Some)
        .ok_or("Assignee ID must be a number ≥ 1")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> TaskForm {
        TaskForm::new("Fix bug", "2024-01-10")
            .with_status("to_do")
            .with_priority("low")
    }

    #[test]
    fn minimal_valid_form() {
        let draft = validate(&base()).unwrap();
        assert_eq!(draft.title, "Fix bug");
        assert_eq!(draft.description, None);
        assert_eq!(draft.due_date, None);
        assert_eq!(draft.status, TaskStatus::ToDo);
        assert_eq!(draft.priority, TaskPriority::Low);
        assert_eq!(draft.assignee_id, None);
    }

    #[test]
    fn full_valid_form_normalizes_assignee() {
        let form = base()
            .with_description("crash on save")
            .with_due_date("2024-01-10")
            .with_assignee(" 12 ");
        let draft = validate(&form).unwrap();
        assert_eq!(draft.assignee_id, Some(UserId(12)));
        assert_eq!(draft.due_date, Some(draft.start_date));
        assert_eq!(draft.description.as_deref(), Some("crash on save"));
    }

    #[test]
    fn due_before_start_is_the_only_error() {
        let form = base().with_due_date("2024-01-05");
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(TaskField::DueDate), Some("Due date must be after start date"));
    }

    #[test]
    fn title_length_bounds() {
        for (title, expected) in [
            ("", Some("Title is required")),
            ("ab", Some("Title must be at least 3 characters")),
            ("abc", None),
        ] {
            let errors = validate(&TaskForm { title: title.to_string(), ..base() }).err();
            assert_eq!(errors.as_ref().and_then(|e| e.get(TaskField::Title)), expected);
            if let Some(errors) = errors {
                assert_eq!(errors.len(), 1, "title error must not spill into other fields");
            }
        }

        let exactly_max = "x".repeat(100);
        assert!(validate(&TaskForm { title: exactly_max, ..base() }).is_ok());

        let too_long = "x".repeat(101);
        let errors = validate(&TaskForm { title: too_long, ..base() }).unwrap_err();
        assert_eq!(errors.get(TaskField::Title), Some("Title must be less than 100 characters"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let form = TaskForm { title: "épé".to_string(), ..base() };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn description_limit() {
        let ok = base().with_description("d".repeat(500));
        assert!(validate(&ok).is_ok());

        let too_long = base().with_description("d".repeat(501));
        let errors = validate(&too_long).unwrap_err();
        assert_eq!(
            errors.get(TaskField::Description),
            Some("Description must be less than 500 characters")
        );
    }

    #[test]
    fn start_date_required_and_well_formed() {
        let errors = validate(&TaskForm { start_date: String::new(), ..base() }).unwrap_err();
        assert_eq!(errors.get(TaskField::StartDate), Some("Start date is required"));

        for bad in ["10/01/2024", "2024-02-30", "2024-1-1"] {
            let errors = validate(&TaskForm { start_date: bad.to_string(), ..base() }).unwrap_err();
            assert_eq!(errors.get(TaskField::StartDate), Some("Please enter a valid date"));
        }
    }

    #[test]
    fn due_date_comparison_skipped_when_start_invalid() {
        let form = TaskForm {
            start_date: "not-a-date".to_string(),
            ..base().with_due_date("2000-01-01")
        };
        let errors = validate(&form).unwrap_err();
        assert!(errors.contains(TaskField::StartDate));
        assert!(!errors.contains(TaskField::DueDate));

        let form = TaskForm {
            start_date: String::new(),
            ..base().with_due_date("2000-01-01")
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_due_date() {
        let errors = validate(&base().with_due_date("2024-13-01")).unwrap_err();
        assert_eq!(errors.get(TaskField::DueDate), Some("Please enter a valid date"));
    }

    #[test]
    fn enum_fields_required_and_checked() {
        let form = TaskForm {
            status: String::new(),
            priority: "urgent".to_string(),
            ..base()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(TaskField::Status), Some("Status is required"));
        assert_eq!(errors.get(TaskField::Priority), Some("Please select a valid priority"));

        let form = TaskForm {
            status: "blocked".to_string(),
            priority: String::new(),
            ..base()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(TaskField::Status), Some("Please select a valid status"));
        assert_eq!(errors.get(TaskField::Priority), Some("Priority is required"));
    }

    #[test]
    fn assignee_must_be_positive_integer() {
        for bad in ["0", "-3", "1.5", "abc"] {
            let errors = validate(&base().with_assignee(bad)).unwrap_err();
            assert_eq!(
                errors.get(TaskField::AssigneeId),
                Some("Assignee ID must be a number ≥ 1"),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let form = TaskForm {
            title: "x".to_string(),
            description: "d".repeat(600),
            start_date: "yesterday".to_string(),
            due_date: "tomorrow".to_string(),
            status: "nope".to_string(),
            priority: "nope".to_string(),
            assignee_id: "0".to_string(),
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 7);
        let fields: Vec<_> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec![
                TaskField::Title,
                TaskField::Description,
                TaskField::StartDate,
                TaskField::DueDate,
                TaskField::Status,
                TaskField::Priority,
                TaskField::AssigneeId,
            ]
        );
    }

    #[test]
    fn revalidating_a_normalized_value_is_stable() {
        let form = base()
            .with_description("steps in ticket")
            .with_due_date("2024-02-01")
            .with_status("in_progress")
            .with_priority("high")
            .with_assignee("7");
        let draft = validate(&form).unwrap();
        let again = validate(&TaskForm::from(&draft)).unwrap();
        assert_eq!(again, draft);
    }

    #[test]
    fn defaults_match_the_blank_form() {
        let form = TaskForm::default();
        assert_eq!(form.status, "to_do");
        assert_eq!(form.priority, "medium");

        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(TaskField::Title));
        assert!(errors.contains(TaskField::StartDate));
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let errors = validate(&base().with_due_date("2024-01-05")).unwrap_err();
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"due_date":"Due date must be after start date"}"#);
    }
}
