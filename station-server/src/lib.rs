//! Station directory server.
//!
//! An HTTP service that answers: "which stations are in this city, or
//! carry this code?" from a fixed in-memory dataset.

pub mod config;
pub mod domain;
pub mod stations;
pub mod web;
