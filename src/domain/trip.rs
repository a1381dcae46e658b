//! Trips and the countries they visit.
//!
//! Trip and country rows are maintained outside this service, so their text
//! and capacity are carried as stored rather than re-validated.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CountryId, TripId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
}

/// Country summary attached to a trip in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

/// Catalog entry: a trip with every country linked to it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripWithCountries {
    pub trip: Trip,
    pub countries: Vec<Country>,
}

/// Capacity of a trip next to its current registration count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripOccupancy {
    pub max_people: i32,
    pub registered: i64,
}

impl TripOccupancy {
    /// Whether one more registration fits. A zero or negative capacity admits nobody.
    pub fn has_free_slot(&self) -> bool {
        i64::from(self.max_people) > self.registered
    }
}
