use std::str::FromStr;

use super::{Classified, TaskPriority, TaskStatus};
use crate::form::{FieldErrors, TaskField};

/// Status/priority constraints used to narrow a task list.
///
/// An unset constraint matches everything, so `TaskFilter::default()` keeps every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Build from the raw values of a search form, where `""` means "All".
    pub fn parse(status: &str, priority: &str) -> Result<Self, FieldErrors<TaskField>> {
        let mut errors = FieldErrors::new();
        let status = parse_choice::<TaskStatus>(status)
            .map_err(|_| errors.insert(TaskField::Status, "Please select a valid status"))
            .ok()
            .flatten();
        let priority = parse_choice::<TaskPriority>(priority)
            .map_err(|_| errors.insert(TaskField::Priority, "Please select a valid priority"))
            .ok()
            .flatten();

        errors.into_result(Self { status, priority })
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }

    pub fn matches<T: Classified + ?Sized>(&self, item: &T) -> bool {
        self.status.is_none_or(|s| s == item.status())
            && self.priority.is_none_or(|p| p == item.priority())
    }

    /// Lazily yield the matching items in their original order.
    ///
    /// The source slice is only borrowed; calling this again restarts from the beginning.
    pub fn apply<'a, T: Classified>(&self, items: &'a [T]) -> impl Iterator<Item = &'a T> + use<'a, T> {
        let criteria = *self;
        items.iter().filter(move |item| criteria.matches(*item))
    }
}

fn parse_choice<E: FromStr>(raw: &str) -> Result<Option<E>, E::Err> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

/// Owned variant of [`TaskFilter::apply`]: the matching items, cloned, in original order.
pub fn filter<T: Classified + Clone>(items: &[T], criteria: &TaskFilter) -> Vec<T> {
    criteria.apply(items).cloned().collect()
}
