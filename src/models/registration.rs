//! Diesel models for the `Client_Trip` association.

use diesel::prelude::*;

use crate::domain::registration::NewRegistration as DomainNewRegistration;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::client_trip)]
#[diesel(primary_key(id_client, id_trip))]
pub struct ClientTrip {
    pub id_client: i32,
    pub id_trip: i32,
    pub registered_at: i32,
    pub payment_date: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::client_trip)]
/// Insertable form of [`ClientTrip`].
pub struct NewClientTrip {
    pub id_client: i32,
    pub id_trip: i32,
    pub registered_at: i32,
    pub payment_date: Option<i32>,
}

impl From<&DomainNewRegistration> for NewClientTrip {
    fn from(registration: &DomainNewRegistration) -> Self {
        Self {
            id_client: registration.client_id.get(),
            id_trip: registration.trip_id.get(),
            registered_at: registration.registered_at.get(),
            payment_date: None,
        }
    }
}
