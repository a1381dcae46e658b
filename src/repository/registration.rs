use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        registration::{ClientTrip, NewRegistration, RegistrationInsert},
        trip::Trip,
        types::{ClientId, TripId},
    },
    models::{
        registration::{ClientTrip as DbClientTrip, NewClientTrip as DbNewClientTrip},
        trip::Trip as DbTrip,
    },
    repository::{
        DieselRepository, RegistrationReader, RegistrationWriter,
        errors::{RepositoryError, RepositoryResult},
        trip::load_trip_occupancy,
    },
};

impl RegistrationReader for DieselRepository {
    fn list_client_trips(&self, client_id: ClientId) -> RepositoryResult<Vec<ClientTrip>> {
        use crate::schema::{client_trip, trips};

        let mut conn = self.conn()?;

        let rows = client_trip::table
            .inner_join(trips::table)
            .filter(client_trip::id_client.eq(client_id.get()))
            .order((trips::date_from.asc(), trips::id_trip.asc()))
            .select((DbTrip::as_select(), DbClientTrip::as_select()))
            .load::<(DbTrip, DbClientTrip)>(&mut conn)?;

        let client_trips = rows
            .into_iter()
            .filter_map(|(db_trip, db_registration)| {
                let trip_id = db_trip.id_trip;
                match Trip::try_from(db_trip) {
                    Ok(trip) => Some(ClientTrip {
                        trip,
                        registered_at: db_registration.registered_at,
                        payment_date: db_registration.payment_date,
                    }),
                    Err(err) => {
                        log::warn!("Skipping trip row {trip_id} of client {client_id}: {err}");
                        None
                    }
                }
            })
            .collect();

        Ok(client_trips)
    }
}

impl RegistrationWriter for DieselRepository {
    fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> RepositoryResult<RegistrationInsert> {
        use crate::schema::client_trip;

        let mut conn = self.conn()?;
        let row: DbNewClientTrip = registration.into();

        // BEGIN IMMEDIATE takes the write lock before the checks run.
        let outcome = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let already_registered = diesel::select(exists(
                client_trip::table.find((row.id_client, row.id_trip)),
            ))
            .get_result::<bool>(conn)?;
            if already_registered {
                return Ok(RegistrationInsert::AlreadyRegistered);
            }

            let has_free_slot = load_trip_occupancy(conn, registration.trip_id)?
                .is_some_and(|occupancy| occupancy.has_free_slot());
            if !has_free_slot {
                return Ok(RegistrationInsert::CapacityExceeded);
            }

            diesel::insert_into(client_trip::table)
                .values(&row)
                .execute(conn)?;

            Ok(RegistrationInsert::Inserted)
        });

        match outcome {
            Err(err) if err.is_unique_violation() => Ok(RegistrationInsert::AlreadyRegistered),
            other => other,
        }
    }

    fn delete_registration(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> RepositoryResult<usize> {
        use crate::schema::client_trip;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(client_trip::table.find((client_id.get(), trip_id.get())))
                .execute(&mut conn)?;

        Ok(deleted)
    }
}
