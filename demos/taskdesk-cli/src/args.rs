use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use taskdesk_api::DEFAULT_BASE_URL;
use taskdesk_model::{TaskForm, TaskId};

#[derive(Parser, Debug)]
#[command(name = "taskdesk")]
#[command(about = "List, filter, create, update and delete workspace tasks")]
pub struct Args {
    /// Root URL of the task API
    #[arg(long, env = "TASKDESK_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Where the signed-in session is kept (default: ~/.taskdesk/session.json)
    #[arg(long, env = "TASKDESK_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `taskdesk_api=debug`
    #[arg(long, env = "TASKDESK_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format: text, json or journald
    #[arg(long, env = "TASKDESK_LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        /// Account e-mail
        #[arg(long)]
        username: String,
        #[arg(long, env = "TASKDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// All tasks, optionally filtered
    List {
        /// to_do, in_progress or done (empty: all)
        #[arg(long, default_value = "")]
        status: String,
        /// low, medium or high (empty: all)
        #[arg(long, default_value = "")]
        priority: String,
    },
    /// Tasks assigned to me
    Mine,
    /// One task in detail
    Show { id: TaskId },
    /// Create a task
    Create(CreateArgs),
    /// Change some fields of a task
    Update {
        id: TaskId,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Delete a task
    Delete { id: TaskId },
}

#[derive(ClapArgs, Debug)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub start_date: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub due_date: String,
    #[arg(long, default_value = "to_do")]
    pub status: String,
    #[arg(long, default_value = "medium")]
    pub priority: String,
    #[arg(long, default_value = "")]
    pub assignee: String,
}

impl CreateArgs {
    pub fn into_form(self) -> TaskForm {
        TaskForm {
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            due_date: self.due_date,
            status: self.status,
            priority: self.priority,
            assignee_id: self.assignee,
        }
    }
}

/// Fields left out keep their current value. Pass an empty string to clear an optional one.
#[derive(ClapArgs, Debug)]
pub struct UpdateArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub due_date: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
}

impl UpdateArgs {
    /// Overlay the given fields on a pre-filled edit form.
    pub fn apply(self, mut form: TaskForm) -> TaskForm {
        let overlay = [
            (self.title, &mut form.title),
            (self.description, &mut form.description),
            (self.start_date, &mut form.start_date),
            (self.due_date, &mut form.due_date),
            (self.status, &mut form.status),
            (self.priority, &mut form.priority),
            (self.assignee, &mut form.assignee_id),
        ];
        for (value, slot) in overlay {
            if let Some(value) = value {
                *slot = value;
            }
        }
        form
    }
}
