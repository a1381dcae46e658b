//! Operations behind the API endpoints.
//!
//! Each function takes the repository as an explicit argument and returns
//! exactly one outcome: the payload or a single [`ServiceError`].

pub mod clients;
pub mod errors;
pub mod registrations;
pub mod trips;

pub use errors::{ConflictKind, MissingEntity, ServiceError, ServiceResult};
