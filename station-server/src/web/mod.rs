//! Web layer for the station directory.
//!
//! Provides the HTTP endpoints and maps handler outcomes to JSON responses.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
