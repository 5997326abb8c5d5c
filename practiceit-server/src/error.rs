//! Error types for practiceit-server

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while bootstrapping or running the server
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
