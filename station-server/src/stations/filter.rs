//! Query filters over station records.

use crate::domain::Station;

/// Conjunctive filter on city and code.
///
/// Both keys match exactly, ignoring case. A key set to `None` matches
/// every station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationFilter {
    pub city: Option<String>,
    pub code: Option<String>,
}

impl StationFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Values are trimmed; empty or whitespace-only values count as absent.
    pub fn from_params(city: Option<&str>, code: Option<&str>) -> Self {
        Self {
            city: normalize_param(city),
            code: normalize_param(code),
        }
    }

    /// Check if a station satisfies every active key.
    pub fn matches(&self, station: &Station) -> bool {
        matches_key(self.city.as_deref(), &station.city)
            && matches_key(self.code.as_deref(), &station.code)
    }
}

fn normalize_param(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn matches_key(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|w| w.to_lowercase() == actual.to_lowercase())
}
