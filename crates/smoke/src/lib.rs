//! End-to-end smoke checks against a running Mushroom Finder API.

pub mod client;
pub mod config;
pub mod suite;
