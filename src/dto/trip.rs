//! Trip catalog payloads.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::trip::{Country, Trip, TripWithCountries};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub id_country: i32,
    pub name: String,
}

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        Self {
            id_country: country.id.get(),
            name: country.name,
        }
    }
}

/// Catalog entry as served by `GET /api/trips`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub id_trip: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub countries: Vec<CountryDto>,
}

impl TripDto {
    fn from_parts(trip: Trip, countries: Vec<CountryDto>) -> Self {
        Self {
            id_trip: trip.id.get(),
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.max_people,
            countries,
        }
    }
}

impl From<TripWithCountries> for TripDto {
    fn from(entry: TripWithCountries) -> Self {
        let countries = entry.countries.into_iter().map(CountryDto::from).collect();
        Self::from_parts(entry.trip, countries)
    }
}
