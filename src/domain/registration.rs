//! Client-trip registrations (`Client_Trip` rows).

use serde::{Deserialize, Serialize};

use crate::domain::trip::Trip;
use crate::domain::types::{ClientId, DateStamp, TripId};

/// Registration about to be inserted; payment is always pending at this point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewRegistration {
    pub client_id: ClientId,
    pub trip_id: TripId,
    pub registered_at: DateStamp,
}

impl NewRegistration {
    #[must_use]
    pub fn new(client_id: ClientId, trip_id: TripId, registered_at: DateStamp) -> Self {
        Self {
            client_id,
            trip_id,
            registered_at,
        }
    }
}

/// A trip the client is registered for, with the registration details.
///
/// Dates are the stored `YYYYMMDD` integers, passed through unchanged; only
/// dates written by this service are guaranteed to be calendar days.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientTrip {
    pub trip: Trip,
    pub registered_at: i32,
    pub payment_date: Option<i32>,
}

/// Result of the guarded registration insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationInsert {
    Inserted,
    AlreadyRegistered,
    /// The trip is full, or no longer exists and so has no free slot.
    CapacityExceeded,
}
