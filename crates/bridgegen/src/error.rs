use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no abstract class found")]
    NoInterface,

    #[error("no abstract class found (no pure virtual methods) in '{class}'")]
    NoPureVirtual { class: String },

    #[error("unbalanced braces in input text")]
    UnbalancedBraces,

    #[error("index {0} does not point to an opening brace")]
    InvalidBraceStart(usize),

    #[error("header path has no parent directory or file name")]
    InvalidHeaderPath,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Config(#[from] figment::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
