use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid key {0:?}: only letters a-z are accepted")]
    InvalidKey(String),
    #[error("invalid value {0:?}: expected an integer")]
    InvalidValue(String),
    #[error("another operation is still in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;
