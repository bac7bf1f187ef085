use std::fmt;

use crate::container::ContainerId;

#[derive(Debug)]
pub enum BarError {
    LockError,
    ContainerNotFound(ContainerId),
    FileReaderError(String),
    InvalidConfiguration(String),
}

impl fmt::Display for BarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarError::LockError => write!(f, "shared state lock was poisoned"),
            BarError::ContainerNotFound(id) => write!(f, "container {} is not in play", id),
            BarError::FileReaderError(reason) => write!(f, "could not read file: {}", reason),
            BarError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for BarError {}

impl<T> From<std::sync::PoisonError<T>> for BarError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        BarError::LockError
    }
}

impl From<std::io::Error> for BarError {
    fn from(error: std::io::Error) -> Self {
        BarError::FileReaderError(error.to_string())
    }
}

impl From<serde_json::Error> for BarError {
    fn from(error: serde_json::Error) -> Self {
        BarError::InvalidConfiguration(error.to_string())
    }
}
