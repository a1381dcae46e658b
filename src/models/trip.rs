//! Diesel models for trips and the countries they visit.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::trip::{Country as DomainCountry, Trip as DomainTrip};
use crate::domain::types::{CountryId, TripId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::trips)]
#[diesel(primary_key(id_trip))]
/// Diesel model for [`crate::domain::trip::Trip`].
pub struct Trip {
    pub id_trip: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::countries)]
#[diesel(primary_key(id_country))]
pub struct Country {
    pub id_country: i32,
    pub name: String,
}

/// Only the key is checked; the remaining columns are passed through as stored.
impl TryFrom<Trip> for DomainTrip {
    type Error = TypeConstraintError;

    fn try_from(trip: Trip) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TripId::try_from(trip.id_trip)?,
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.max_people,
        })
    }
}

impl TryFrom<Country> for DomainCountry {
    type Error = TypeConstraintError;

    fn try_from(country: Country) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CountryId::try_from(country.id_country)?,
            name: country.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_trip() -> Trip {
        let day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        Trip {
            id_trip: 3,
            name: "Alps".to_string(),
            description: None,
            date_from: day.and_hms_opt(8, 0, 0).unwrap(),
            date_to: day.and_hms_opt(20, 0, 0).unwrap(),
            max_people: 12,
        }
    }

    #[test]
    fn trip_into_domain() {
        let domain = DomainTrip::try_from(sample_trip()).expect("valid trip");
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.name, "Alps");
        assert_eq!(domain.max_people, 12);
    }

    #[test]
    fn stored_trip_values_are_kept_verbatim() {
        let trip = Trip {
            name: String::new(),
            max_people: -1,
            ..sample_trip()
        };
        let domain = DomainTrip::try_from(trip).expect("row with blank name");
        assert_eq!(domain.name, "");
        assert_eq!(domain.max_people, -1);
    }

    #[test]
    fn trip_with_non_positive_key_is_rejected() {
        let trip = Trip {
            id_trip: 0,
            ..sample_trip()
        };
        assert_eq!(
            DomainTrip::try_from(trip),
            Err(TypeConstraintError::NonPositiveId)
        );
    }

    #[test]
    fn country_into_domain() {
        let country = Country {
            id_country: 48,
            name: " Poland ".to_string(),
        };
        let domain = DomainCountry::try_from(country).expect("valid country");
        assert_eq!(domain.id.get(), 48);
        assert_eq!(domain.name, " Poland ");
    }
}
