//! Repository traits and their Diesel implementation.
//!
//! Services depend on the narrow reader/writer traits so workflows can be
//! exercised against mocks; [`DieselRepository`] implements all of them on top
//! of the shared connection pool.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient},
        registration::{ClientTrip, NewRegistration, RegistrationInsert},
        trip::{TripOccupancy, TripWithCountries},
        types::{ClientId, TripId},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod entity;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod registration;
pub mod trip;

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Closed set of existence checks, one per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKey {
    Client(ClientId),
    Trip(TripId),
    Registration { client_id: ClientId, trip_id: TripId },
}

pub trait EntityReader {
    /// Whether at least one row matches `key`.
    fn entity_exists(&self, key: EntityKey) -> RepositoryResult<bool>;
}

pub trait ClientReader {
    /// Whether a stored client already uses the candidate's email, or its
    /// pesel when one is given.
    fn client_identity_taken(&self, candidate: &NewClient) -> RepositoryResult<bool>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
}

pub trait TripReader {
    /// All trips ordered by start date, each with its linked countries.
    fn list_trips_with_countries(&self) -> RepositoryResult<Vec<TripWithCountries>>;
    /// Capacity and current registration count, `None` when the trip is missing.
    fn get_trip_occupancy(&self, trip_id: TripId) -> RepositoryResult<Option<TripOccupancy>>;
}

pub trait RegistrationReader {
    /// Trips the client is registered for, ordered by start date.
    fn list_client_trips(&self, client_id: ClientId) -> RepositoryResult<Vec<ClientTrip>>;
}

pub trait RegistrationWriter {
    /// Inserts the registration unless it already exists or the trip is full.
    ///
    /// Both conditions are re-evaluated under the database write lock, so two
    /// concurrent callers can never both take the last slot.
    fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> RepositoryResult<RegistrationInsert>;
    /// Deletes the registration, returning the number of affected rows.
    fn delete_registration(&self, client_id: ClientId, trip_id: TripId)
    -> RepositoryResult<usize>;
}
