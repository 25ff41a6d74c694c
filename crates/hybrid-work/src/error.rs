//! Error types for work operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: work handle is empty")]
    EmptyHandle,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
