use thiserror::Error;

/// Failure kinds shared by every layer that talks to a remote novel source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("application error: {0}")]
    Application(String),
}

