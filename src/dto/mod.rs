//! Response bodies returned by the HTTP API.

pub mod client;
pub mod trip;
