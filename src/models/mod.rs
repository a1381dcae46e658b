//! Diesel models and configuration structures.

pub mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod registration;
pub mod trip;
