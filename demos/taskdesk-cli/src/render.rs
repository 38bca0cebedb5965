use std::fmt::{Display, Write};

use taskdesk_model::{FieldErrors, Task};

const TITLE_WIDTH: usize = 32;

pub const NO_MATCHING_TASKS: &str = "No tasks match the selected filters.";
pub const NO_ASSIGNED_TASKS: &str = "You don't have any assigned tasks.";

/// One `field: message` line per invalid field.
pub fn field_errors<F: Ord + Display>(errors: &FieldErrors<F>) -> String {
    let mut out = String::new();
    for (field, message) in errors.iter() {
        let _ = writeln!(out, "{field}: {message}");
    }
    out
}

/// Aligned task rows, or `empty` on its own line when there is nothing to show.
pub fn task_table(tasks: &[Task], empty: &str) -> String {
    if tasks.is_empty() {
        return format!("{empty}\n");
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<width$}  {:<11}  {:<8}  {}",
        "ID",
        "TITLE",
        "STATUS",
        "PRIORITY",
        "DUE",
        width = TITLE_WIDTH
    );
    for task in tasks {
        let due = task.due_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:>5}  {:<width$}  {:<11}  {:<8}  {}",
            task.id,
            clip(&task.title, TITLE_WIDTH),
            task.status.label(),
            task.priority,
            due,
            width = TITLE_WIDTH
        );
    }
    out
}

pub fn task_detail(task: &Task) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", task.id, task.title);
    if let Some(description) = &task.description {
        let _ = writeln!(out, "  {description}");
    }
    let _ = writeln!(out, "status:    {}", task.status.label());
    let _ = writeln!(out, "priority:  {}", task.priority);
    let _ = writeln!(out, "start:     {}", task.start_date);
    if let Some(due) = task.due_date {
        let _ = writeln!(out, "due:       {due}");
    }
    if let Some(assignee) = task.assignee_id {
        let _ = writeln!(out, "assignee:  {assignee}");
    }
    out
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width - 1).collect();
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use taskdesk_model::{TaskField, TaskForm, TaskId};

    use super::*;

    fn task(title: &str, due: &str) -> Task {
        let draft = TaskForm::new(title, "2024-01-01")
            .with_due_date(due)
            .with_status("in_progress")
            .validate()
            .unwrap();
        Task::from_draft(TaskId(7), draft)
    }

    #[test]
    fn empty_list_message() {
        assert_eq!(
            task_table(&[], NO_MATCHING_TASKS),
            "No tasks match the selected filters.\n"
        );
        assert_eq!(
            task_table(&[], NO_ASSIGNED_TASKS),
            "You don't have any assigned tasks.\n"
        );
    }

    #[test]
    fn rows_show_label_and_dash_for_missing_due() {
        let table = task_table(&[task("Write tests", "")], NO_MATCHING_TASKS);
        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("Write tests"));
        assert!(row.contains("in progress"));
        assert!(row.trim_end().ends_with('-'));
    }

    #[test]
    fn long_titles_are_clipped() {
        let long = "t".repeat(80);
        let table = task_table(&[task(&long, "2024-02-01")], NO_MATCHING_TASKS);
        assert!(!table.contains(&long));
        assert!(table.contains('…'));
        assert!(table.contains("2024-02-01"));
    }

    #[test]
    fn field_errors_one_per_line() {
        let errors = TaskForm::default().validate().unwrap_err();
        let text = field_errors(&errors);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with(&format!("{}: Title is required", TaskField::Title)));
    }
}
