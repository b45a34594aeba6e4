//! Row structs for each table.
//!
//! Each submodule contains a `FromRow` row type and its conversion into the
//! corresponding `mycofind_core` record.

pub mod species;
pub mod spot;
pub mod status;
