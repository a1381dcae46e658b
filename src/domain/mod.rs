//! Domain aggregates exposed by the travel agency service layer.

pub mod client;
pub mod registration;
pub mod trip;
pub mod types;
