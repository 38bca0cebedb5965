mod args;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use taskdesk_api::{ApiConfig, HttpTaskApi};
use taskdesk_core::{DeskError, FileSessionStore, TaskDesk};
use taskdesk_model::{LoginForm, TaskFilter};
use taskdesk_observe::{LoggerConfig, init_logger};

use crate::args::{Args, Command};

type Desk = TaskDesk<HttpTaskApi, FileSessionStore>;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<DeskError>() {
                Some(DeskError::InvalidTask(errors)) => eprint!("{}", render::field_errors(errors)),
                Some(DeskError::InvalidLogin(errors)) => eprint!("{}", render::field_errors(errors)),
                Some(DeskError::NotSignedIn) => eprintln!("not signed in; run `taskdesk login` first"),
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let cfg = LoggerConfig::default()
        .with_format(args.log_format.parse()?)
        .with_level(args.log_level.parse()?);
    init_logger(&cfg)?;

    let api = HttpTaskApi::new(&ApiConfig::default().with_base_url(&args.api_url))?;
    let session_file = args.session_file.clone().unwrap_or_else(default_session_file);
    debug!(api = api.base_url(), session = %session_file.display(), "starting");

    let desk: Desk = TaskDesk::new(api, FileSessionStore::new(session_file));
    dispatch(&desk, args.command).await
}

async fn dispatch(desk: &Desk, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { username, password } => {
            let session = desk.login(&LoginForm::new(username, password)).await?;
            println!("signed in as {} (id {})", session.user.email, session.user.id);
        }
        Command::Logout => match desk.logout()? {
            Some(user) => println!("signed out {}", user.email),
            None => println!("no active session"),
        },
        Command::Whoami => match desk.current_user()? {
            Some(user) => println!("{} (id {})", user.email, user.id),
            None => println!("not signed in"),
        },
        Command::List { status, priority } => {
            let criteria = TaskFilter::parse(&status, &priority).map_err(DeskError::from)?;
            let tasks = desk.list_tasks(&criteria).await?;
            print!("{}", render::task_table(&tasks, render::NO_MATCHING_TASKS));
        }
        Command::Mine => {
            let tasks = desk.my_tasks().await?;
            print!("{}", render::task_table(&tasks, render::NO_ASSIGNED_TASKS));
        }
        Command::Show { id } => {
            let task = desk.get_task(id).await?;
            print!("{}", render::task_detail(&task));
        }
        Command::Create(fields) => {
            let task = desk.create_task(&fields.into_form()).await?;
            println!("created task {}", task.id);
        }
        Command::Update { id, fields } => {
            let form = fields.apply(desk.edit_form(id).await?);
            let task = desk.update_task(id, &form).await?;
            println!("updated task {}", task.id);
        }
        Command::Delete { id } => {
            desk.delete_task(id).await?;
            println!("deleted task {id}");
        }
    }
    Ok(())
}

fn default_session_file() -> PathBuf {
    let base = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    base.join(".taskdesk").join("session.json")
}
