use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Entity a lookup failed to find, carrying the requested raw identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEntity {
    Client(i32),
    Trip(i32),
    Registration,
}

impl Display for MissingEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingEntity::Client(id) => write!(f, "Client with ID {id} not found"),
            MissingEntity::Trip(id) => write!(f, "Trip with ID {id} not found"),
            MissingEntity::Registration => write!(f, "Registration not found"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    DuplicateClient,
    AlreadyRegistered,
    CapacityExceeded,
}

impl Display for ConflictKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictKind::DuplicateClient => {
                write!(f, "Client with this PESEL or Email already exists")
            }
            ConflictKind::AlreadyRegistered => {
                write!(f, "Client is already registered for this trip")
            }
            ConflictKind::CapacityExceeded => write!(f, "Trip has reached maximum capacity"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(MissingEntity),

    #[error("{0}")]
    Conflict(ConflictKind),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
