pub mod species;
pub mod spots;
pub mod status;
