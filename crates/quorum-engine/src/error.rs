//! Error types for quorum-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuorumError {
    #[error("Event already exists: {0}")]
    DuplicateEvent(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),
}

pub type Result<T> = std::result::Result<T, QuorumError>;
