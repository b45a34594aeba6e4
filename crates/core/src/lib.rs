//! Mushroom Finder domain layer.
//!
//! Holds the validated record types, the persistence-gateway traits with an
//! in-memory implementation, and the spot/species services built on top of
//! them. Nothing in here knows about HTTP or PostgreSQL.

pub mod error;
pub mod geo;
pub mod patch;
pub mod search;
pub mod species;
pub mod species_service;
pub mod spot;
pub mod spot_service;
pub mod status;
pub mod store;
pub mod types;
