//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::{StationDataset, StationSource};

/// Shared application state.
///
/// The station source is read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Source of raw station records
    pub stations: Arc<dyn StationSource>,
}

impl AppState {
    /// Create a new app state serving `stations`.
    pub fn new(stations: impl StationSource + 'static) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StationDataset::builtin())
    }
}
