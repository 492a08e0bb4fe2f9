//! Domain types for the station directory.
//!
//! Station records arrive untyped and are only trusted once they pass
//! structural validation.

mod station;

pub use station::{REQUIRED_FIELDS, Station, is_valid_station};
