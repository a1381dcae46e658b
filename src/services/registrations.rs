//! Registration workflow: enrolling clients in trips and cancelling enrolments.
//!
//! Preconditions are evaluated in a fixed order and the first failing one is
//! reported: client, trip, existing registration, then capacity. The insert
//! itself re-checks uniqueness and capacity under the database write lock, so
//! a request that loses a race still gets the matching conflict.

use crate::domain::registration::{ClientTrip, NewRegistration, RegistrationInsert};
use crate::domain::types::{ClientId, DateStamp, TripId};
use crate::repository::{
    EntityKey, EntityReader, RegistrationReader, RegistrationWriter, TripReader,
};
use crate::services::{ConflictKind, MissingEntity, ServiceError, ServiceResult};

fn existing_client<R>(repo: &R, client_id: i32) -> ServiceResult<ClientId>
where
    R: EntityReader + ?Sized,
{
    let missing = ServiceError::NotFound(MissingEntity::Client(client_id));
    let Ok(id) = ClientId::new(client_id) else {
        return Err(missing);
    };
    if repo.entity_exists(EntityKey::Client(id))? {
        Ok(id)
    } else {
        Err(missing)
    }
}

fn existing_trip<R>(repo: &R, trip_id: i32) -> ServiceResult<TripId>
where
    R: EntityReader + ?Sized,
{
    let missing = ServiceError::NotFound(MissingEntity::Trip(trip_id));
    let Ok(id) = TripId::new(trip_id) else {
        return Err(missing);
    };
    if repo.entity_exists(EntityKey::Trip(id))? {
        Ok(id)
    } else {
        Err(missing)
    }
}

/// Lists the trips a client is registered for, ordered by start date.
pub fn list_client_trips<R>(repo: &R, client_id: i32) -> ServiceResult<Vec<ClientTrip>>
where
    R: EntityReader + RegistrationReader + ?Sized,
{
    let client_id = existing_client(repo, client_id)?;

    let trips = repo.list_client_trips(client_id).map_err(|err| {
        log::error!("Failed to list trips of client {client_id}: {err}");
        err
    })?;

    Ok(trips)
}

/// Registers the client for the trip with `registered_at` as the registration date.
pub fn register_client_for_trip<R>(
    repo: &R,
    client_id: i32,
    trip_id: i32,
    registered_at: DateStamp,
) -> ServiceResult<()>
where
    R: EntityReader + TripReader + RegistrationWriter + ?Sized,
{
    let client_id = existing_client(repo, client_id)?;
    let trip_id = existing_trip(repo, trip_id)?;

    if repo.entity_exists(EntityKey::Registration { client_id, trip_id })? {
        log::debug!("Client {client_id} is already registered for trip {trip_id}");
        return Err(ServiceError::Conflict(ConflictKind::AlreadyRegistered));
    }

    let has_free_slot = repo
        .get_trip_occupancy(trip_id)?
        .is_some_and(|occupancy| occupancy.has_free_slot());
    if !has_free_slot {
        log::debug!("Trip {trip_id} is full");
        return Err(ServiceError::Conflict(ConflictKind::CapacityExceeded));
    }

    let registration = NewRegistration::new(client_id, trip_id, registered_at);
    let outcome = repo.create_registration(&registration).map_err(|err| {
        log::error!("Failed to register client {client_id} for trip {trip_id}: {err}");
        err
    })?;

    match outcome {
        RegistrationInsert::Inserted => {
            log::info!("Registered client {client_id} for trip {trip_id} on {registered_at}");
            Ok(())
        }
        RegistrationInsert::AlreadyRegistered => {
            log::warn!("Concurrent registration of client {client_id} for trip {trip_id}");
            Err(ServiceError::Conflict(ConflictKind::AlreadyRegistered))
        }
        RegistrationInsert::CapacityExceeded => {
            log::warn!("Trip {trip_id} filled up while registering client {client_id}");
            Err(ServiceError::Conflict(ConflictKind::CapacityExceeded))
        }
    }
}

/// Removes the client's registration for the trip.
pub fn cancel_registration<R>(repo: &R, client_id: i32, trip_id: i32) -> ServiceResult<()>
where
    R: EntityReader + RegistrationWriter + ?Sized,
{
    let missing = ServiceError::NotFound(MissingEntity::Registration);
    let (Ok(client_id), Ok(trip_id)) = (ClientId::new(client_id), TripId::new(trip_id)) else {
        return Err(missing);
    };

    if !repo.entity_exists(EntityKey::Registration { client_id, trip_id })? {
        return Err(missing);
    }

    let deleted = repo
        .delete_registration(client_id, trip_id)
        .map_err(|err| {
            log::error!("Failed to delete registration ({client_id}, {trip_id}): {err}");
            err
        })?;

    if deleted == 0 {
        log::error!("Registration ({client_id}, {trip_id}) vanished before it was deleted");
        return Err(ServiceError::Internal(
            "Failed to delete registration".to_string(),
        ));
    }

    log::info!("Cancelled registration of client {client_id} for trip {trip_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::Sequence;

    use super::*;
    use crate::domain::trip::{Trip, TripOccupancy};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn today() -> DateStamp {
        DateStamp::new(20250601).unwrap()
    }

    fn occupancy(max_people: i32, registered: i64) -> TripOccupancy {
        TripOccupancy {
            max_people,
            registered,
        }
    }

    fn is_client(key: &EntityKey) -> bool {
        matches!(key, EntityKey::Client(_))
    }

    fn is_trip(key: &EntityKey) -> bool {
        matches!(key, EntityKey::Trip(_))
    }

    fn is_registration(key: &EntityKey) -> bool {
        matches!(key, EntityKey::Registration { .. })
    }

    /// Repository where client 1 and trip 2 exist and nothing else is configured.
    fn repo_with_client_and_trip() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists()
            .withf(is_client)
            .returning(|_| Ok(true));
        repo.expect_entity_exists()
            .withf(is_trip)
            .returning(|_| Ok(true));
        repo
    }

    #[test]
    fn registers_when_every_check_passes() {
        let mut repo = MockRepository::new();
        let mut seq = Sequence::new();
        repo.expect_entity_exists()
            .withf(is_client)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        repo.expect_entity_exists()
            .withf(is_trip)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        repo.expect_entity_exists()
            .withf(is_registration)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        repo.expect_get_trip_occupancy()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(occupancy(2, 1))));
        repo.expect_create_registration()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|registration| {
                registration.client_id.get() == 1
                    && registration.trip_id.get() == 2
                    && registration.registered_at.get() == 20250601
            })
            .returning(|_| Ok(RegistrationInsert::Inserted));

        assert_eq!(register_client_for_trip(&repo, 1, 2, today()), Ok(()));
    }

    #[test]
    fn missing_client_stops_before_trip_check() {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists()
            .withf(is_client)
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_entity_exists().withf(is_trip).never();
        repo.expect_get_trip_occupancy().never();
        repo.expect_create_registration().never();

        assert_eq!(
            register_client_for_trip(&repo, 1, 2, today()),
            Err(ServiceError::NotFound(MissingEntity::Client(1)))
        );
    }

    #[test]
    fn non_positive_client_id_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists().never();

        assert_eq!(
            register_client_for_trip(&repo, 0, 2, today()),
            Err(ServiceError::NotFound(MissingEntity::Client(0)))
        );
    }

    #[test]
    fn missing_trip_is_reported_after_client() {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists()
            .withf(is_client)
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_entity_exists()
            .withf(is_trip)
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_entity_exists().withf(is_registration).never();
        repo.expect_create_registration().never();

        assert_eq!(
            register_client_for_trip(&repo, 1, 9, today()),
            Err(ServiceError::NotFound(MissingEntity::Trip(9)))
        );
    }

    #[test]
    fn existing_registration_wins_over_full_trip() {
        let mut repo = repo_with_client_and_trip();
        repo.expect_entity_exists()
            .withf(is_registration)
            .returning(|_| Ok(true));
        repo.expect_get_trip_occupancy().never();
        repo.expect_create_registration().never();

        assert_eq!(
            register_client_for_trip(&repo, 1, 2, today()),
            Err(ServiceError::Conflict(ConflictKind::AlreadyRegistered))
        );
    }

    #[test]
    fn full_trip_rejects_registration() {
        let mut repo = repo_with_client_and_trip();
        repo.expect_entity_exists()
            .withf(is_registration)
            .returning(|_| Ok(false));
        repo.expect_get_trip_occupancy()
            .returning(|_| Ok(Some(occupancy(2, 2))));
        repo.expect_create_registration().never();

        assert_eq!(
            register_client_for_trip(&repo, 1, 2, today()),
            Err(ServiceError::Conflict(ConflictKind::CapacityExceeded))
        );
    }

    #[test]
    fn last_free_slot_is_accepted() {
        let mut repo = repo_with_client_and_trip();
        repo.expect_entity_exists()
            .withf(is_registration)
            .returning(|_| Ok(false));
        repo.expect_get_trip_occupancy()
            .returning(|_| Ok(Some(occupancy(3, 2))));
        repo.expect_create_registration()
            .times(1)
            .returning(|_| Ok(RegistrationInsert::Inserted));

        assert_eq!(register_client_for_trip(&repo, 1, 2, today()), Ok(()));
    }

    #[test]
    fn lost_race_for_last_slot_is_capacity_conflict() {
        let mut repo = repo_with_client_and_trip();
        repo.expect_entity_exists()
            .withf(is_registration)
            .returning(|_| Ok(false));
        repo.expect_get_trip_occupancy()
            .returning(|_| Ok(Some(occupancy(1, 0))));
        repo.expect_create_registration()
            .returning(|_| Ok(RegistrationInsert::CapacityExceeded));

        assert_eq!(
            register_client_for_trip(&repo, 1, 2, today()),
            Err(ServiceError::Conflict(ConflictKind::CapacityExceeded))
        );
    }

    #[test]
    fn lost_race_for_same_pair_is_already_registered() {
        let mut repo = repo_with_client_and_trip();
        repo.expect_entity_exists()
            .withf(is_registration)
            .returning(|_| Ok(false));
        repo.expect_get_trip_occupancy()
            .returning(|_| Ok(Some(occupancy(5, 0))));
        repo.expect_create_registration()
            .returning(|_| Ok(RegistrationInsert::AlreadyRegistered));

        assert_eq!(
            register_client_for_trip(&repo, 1, 2, today()),
            Err(ServiceError::Conflict(ConflictKind::AlreadyRegistered))
        );
    }

    #[test]
    fn gateway_failure_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists()
            .returning(|_| Err(RepositoryError::ConnectionError("no connection".to_string())));

        assert_eq!(
            register_client_for_trip(&repo, 1, 2, today()),
            Err(ServiceError::Internal(
                "Connection error: no connection".to_string()
            ))
        );
    }

    #[test]
    fn cancel_deletes_existing_registration() {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists()
            .withf(|key| {
                *key == EntityKey::Registration {
                    client_id: ClientId::new(4).unwrap(),
                    trip_id: TripId::new(5).unwrap(),
                }
            })
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_delete_registration()
            .times(1)
            .returning(|_, _| Ok(1));

        assert_eq!(cancel_registration(&repo, 4, 5), Ok(()));
    }

    #[test]
    fn cancel_without_registration_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists().returning(|_| Ok(false));
        repo.expect_delete_registration().never();

        assert_eq!(
            cancel_registration(&repo, 4, 5),
            Err(ServiceError::NotFound(MissingEntity::Registration))
        );
    }

    #[test]
    fn cancel_with_zero_deleted_rows_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists().returning(|_| Ok(true));
        repo.expect_delete_registration().returning(|_, _| Ok(0));

        assert_eq!(
            cancel_registration(&repo, 4, 5),
            Err(ServiceError::Internal(
                "Failed to delete registration".to_string()
            ))
        );
    }

    #[test]
    fn client_trips_require_existing_client() {
        let mut repo = MockRepository::new();
        repo.expect_entity_exists().returning(|_| Ok(false));
        repo.expect_list_client_trips().never();

        assert_eq!(
            list_client_trips(&repo, 42),
            Err(ServiceError::NotFound(MissingEntity::Client(42)))
        );
    }

    #[test]
    fn client_trips_are_returned_as_listed() {
        let day = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let trip = Trip {
            id: TripId::new(2).unwrap(),
            name: "Lisbon".to_string(),
            description: None,
            date_from: day.and_hms_opt(9, 0, 0).unwrap(),
            date_to: day.and_hms_opt(18, 0, 0).unwrap(),
            max_people: 10,
        };
        let listed = vec![ClientTrip {
            trip,
            registered_at: 20250601,
            payment_date: None,
        }];
        let expected = listed.clone();

        let mut repo = MockRepository::new();
        repo.expect_entity_exists().returning(|_| Ok(true));
        repo.expect_list_client_trips()
            .times(1)
            .returning(move |_| Ok(listed.clone()));

        assert_eq!(list_client_trips(&repo, 1), Ok(expected));
    }
}
