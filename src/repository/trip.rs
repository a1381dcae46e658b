use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::{
        trip::{Country, Trip, TripOccupancy, TripWithCountries},
        types::TripId,
    },
    models::trip::{Country as DbCountry, Trip as DbTrip},
    repository::{DieselRepository, TripReader, errors::RepositoryResult},
};

/// Reads capacity and registration count on an existing connection so the
/// registration insert can reuse it inside its transaction.
pub(crate) fn load_trip_occupancy(
    conn: &mut SqliteConnection,
    trip_id: TripId,
) -> RepositoryResult<Option<TripOccupancy>> {
    use crate::schema::{client_trip, trips};

    let max_people = trips::table
        .find(trip_id.get())
        .select(trips::max_people)
        .first::<i32>(conn)
        .optional()?;

    let Some(max_people) = max_people else {
        return Ok(None);
    };

    let registered: i64 = client_trip::table
        .filter(client_trip::id_trip.eq(trip_id.get()))
        .count()
        .get_result(conn)?;

    Ok(Some(TripOccupancy {
        max_people,
        registered,
    }))
}

/// Folds join rows, already ordered by trip, into one entry per trip.
///
/// Rows whose key cannot be addressed through the API (zero or negative ids)
/// are logged and left out instead of failing the whole catalog.
fn group_catalog_rows(rows: Vec<(DbTrip, Option<DbCountry>)>) -> Vec<TripWithCountries> {
    let mut catalog: Vec<TripWithCountries> = Vec::new();
    let mut current_id: Option<i32> = None;

    for (db_trip, db_country) in rows {
        let trip_id = db_trip.id_trip;
        if current_id != Some(trip_id) {
            current_id = Some(trip_id);
            match Trip::try_from(db_trip) {
                Ok(trip) => catalog.push(TripWithCountries {
                    trip,
                    countries: Vec::new(),
                }),
                Err(err) => {
                    log::warn!("Skipping trip row {trip_id}: {err}");
                    continue;
                }
            }
        }

        let Some(entry) = catalog
            .last_mut()
            .filter(|entry| entry.trip.id.get() == trip_id)
        else {
            continue;
        };
        let Some(db_country) = db_country else {
            continue;
        };
        let country_id = db_country.id_country;
        match Country::try_from(db_country) {
            Ok(country) => entry.countries.push(country),
            Err(err) => log::warn!("Skipping country row {country_id} of trip {trip_id}: {err}"),
        }
    }

    catalog
}

impl TripReader for DieselRepository {
    fn list_trips_with_countries(&self) -> RepositoryResult<Vec<TripWithCountries>> {
        use crate::schema::{countries, country_trip, trips};

        let mut conn = self.conn()?;

        let rows = trips::table
            .left_join(country_trip::table)
            .left_join(countries::table.on(countries::id_country.eq(country_trip::id_country)))
            .order((
                trips::date_from.asc(),
                trips::id_trip.asc(),
                countries::name.nullable().asc(),
                countries::id_country.nullable().asc(),
            ))
            .select((DbTrip::as_select(), Option::<DbCountry>::as_select()))
            .load::<(DbTrip, Option<DbCountry>)>(&mut conn)?;

        Ok(group_catalog_rows(rows))
    }

    fn get_trip_occupancy(&self, trip_id: TripId) -> RepositoryResult<Option<TripOccupancy>> {
        let mut conn = self.conn()?;
        load_trip_occupancy(&mut conn, trip_id)
    }
}
