//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::registration::{ClientTrip, NewRegistration, RegistrationInsert};
use crate::domain::trip::{TripOccupancy, TripWithCountries};
use crate::domain::types::{ClientId, TripId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientReader, ClientWriter, EntityKey, EntityReader, RegistrationReader, RegistrationWriter,
    TripReader,
};

mock! {
    pub Repository {}

    impl EntityReader for Repository {
        fn entity_exists(&self, key: EntityKey) -> RepositoryResult<bool>;
    }

    impl ClientReader for Repository {
        fn client_identity_taken(&self, candidate: &NewClient) -> RepositoryResult<bool>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    }

    impl TripReader for Repository {
        fn list_trips_with_countries(&self) -> RepositoryResult<Vec<TripWithCountries>>;
        fn get_trip_occupancy(&self, trip_id: TripId) -> RepositoryResult<Option<TripOccupancy>>;
    }

    impl RegistrationReader for Repository {
        fn list_client_trips(&self, client_id: ClientId) -> RepositoryResult<Vec<ClientTrip>>;
    }

    impl RegistrationWriter for Repository {
        fn create_registration(
            &self,
            registration: &NewRegistration,
        ) -> RepositoryResult<RegistrationInsert>;
        fn delete_registration(
            &self,
            client_id: ClientId,
            trip_id: TripId,
        ) -> RepositoryResult<usize>;
    }
}
