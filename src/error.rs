//! Board Errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Please enter a task before creating a ticket.")]
    EmptyTask,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
