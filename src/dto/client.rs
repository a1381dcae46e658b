//! Client-facing payloads: creation result and the client's trip list.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::registration::ClientTrip;
use crate::domain::types::ClientId;

/// Body of a successful `POST /api/clients`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedClientDto {
    pub id_client: i32,
}

impl From<ClientId> for CreatedClientDto {
    fn from(id: ClientId) -> Self {
        Self {
            id_client: id.get(),
        }
    }
}

/// A trip the client is registered for, flattened with registration dates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientTripDto {
    pub id_trip: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub registered_at: i32,
    pub payment_date: Option<i32>,
}

impl From<ClientTrip> for ClientTripDto {
    fn from(entry: ClientTrip) -> Self {
        let trip = entry.trip;
        Self {
            id_trip: trip.id.get(),
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.max_people,
            registered_at: entry.registered_at,
            payment_date: entry.payment_date,
        }
    }
}
