//! Data transfer objects for web requests and responses.

use serde::Serialize;

/// Query parameters for listing stations.
///
/// Built from the raw query pairs so repeated keys are accepted; the first
/// occurrence of each key wins and unknown keys are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StationQuery {
    /// City to match, ignoring case
    pub city: Option<String>,

    /// Station code to match, ignoring case
    pub code: Option<String>,
}

impl StationQuery {
    /// Collect the station parameters from decoded query pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "city" => &mut query.city,
                "code" => &mut query.code,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Greeting returned by the hello endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HelloResponse {
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Short machine-readable error kind (e.g., "not_found")
    pub error: String,

    /// Human-readable detail
    pub message: String,
}
