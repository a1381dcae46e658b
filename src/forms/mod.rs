//! Request payloads accepted by the API routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod client;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name: {0}")]
    InvalidName(TypeConstraintError),

    #[error("invalid telephone: {0}")]
    InvalidTelephone(TypeConstraintError),

    #[error("invalid pesel: {0}")]
    InvalidPesel(TypeConstraintError),
}
