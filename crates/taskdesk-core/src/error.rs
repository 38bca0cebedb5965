use std::path::PathBuf;

use thiserror::Error;

use taskdesk_api::ApiError;
use taskdesk_model::{FieldErrors, LoginField, TaskField};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("invalid task: {0}")]
    InvalidTask(FieldErrors<TaskField>),

    #[error("invalid login: {0}")]
    InvalidLogin(FieldErrors<LoginField>),

    #[error("not signed in")]
    NotSignedIn,

    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("session store error: {0}")]
    Store(#[from] StoreError),
}

impl From<FieldErrors<TaskField>> for DeskError {
    fn from(errors: FieldErrors<TaskField>) -> Self {
        DeskError::InvalidTask(errors)
    }
}

impl From<FieldErrors<LoginField>> for DeskError {
    fn from(errors: FieldErrors<LoginField>) -> Self {
        DeskError::InvalidLogin(errors)
    }
}
