//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod species_repo;
pub mod spot_repo;
pub mod status_check_repo;

pub use species_repo::SpeciesRepo;
pub use spot_repo::SpotRepo;
pub use status_check_repo::StatusCheckRepo;
