use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseEnumError;

/// Progress state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet.
    #[default]
    ToDo,
    /// Someone is working on it.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Wire literal, e.g. `"in_progress"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to_do",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human label: the wire literal with the underscore shown as a space.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to do",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Done => "done",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to_do" => Ok(TaskStatus::ToDo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(ParseEnumError {
                kind: "status",
                value: other.to_string(),
                expected: "to_do|in_progress|done",
            }),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_roundtrip_through_from_str() {
        for status in [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("Done".parse::<TaskStatus>().is_err());
        assert!("".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_literals() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);

        let back: TaskStatus = serde_json::from_str(r#""to_do""#).unwrap();
        assert_eq!(back, TaskStatus::ToDo);
    }

    #[test]
    fn default_is_to_do() {
        assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
        assert_eq!(TaskStatus::InProgress.label(), "in progress");
    }
}
