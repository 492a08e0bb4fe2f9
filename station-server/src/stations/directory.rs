//! Listing stations from a source.

use tracing::{info, warn};

use crate::domain::{Station, is_valid_station};

use super::dataset::StationSource;
use super::error::DirectoryError;
use super::filter::StationFilter;

/// List the stations that pass validation and match `filter`.
///
/// Records that fail structural validation are skipped with a warning.
/// Dataset order is preserved. An empty result is not an error.
pub fn list_stations(
    source: &dyn StationSource,
    filter: &StationFilter,
) -> Result<Vec<Station>, DirectoryError> {
    let records = source.records()?;

    let stations: Vec<Station> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            if !is_valid_station(record) {
                warn!(index, "skipping malformed station record");
                return None;
            }
            Station::from_value(record)
        })
        .filter(|station| filter.matches(station))
        .collect();

    info!(
        city = filter.city.as_deref(),
        code = filter.code.as_deref(),
        count = stations.len(),
        "listed stations"
    );

    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::{DatasetError, StationDataset};
    use serde_json::{Value, json};

    struct BrokenSource;

    impl StationSource for BrokenSource {
        fn records(&self) -> Result<&[Value], DatasetError> {
            Err(DatasetError::Unavailable {
                message: "disk on fire".into(),
            })
        }
    }

    fn codes(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.code.as_str()).collect()
    }

    fn list(city: Option<&str>, code: Option<&str>) -> Vec<Station> {
        let dataset = StationDataset::builtin();
        list_stations(&dataset, &StationFilter::from_params(city, code)).unwrap()
    }

    #[test]
    fn unfiltered_returns_everything_in_order() {
        let stations = list(None, None);
        assert_eq!(codes(&stations), ["NYS", "CHI", "GCT", "WAS", "PHL", "BOS"]);
    }

    #[test]
    fn filter_by_city() {
        let stations = list(Some("New York"), None);
        assert_eq!(codes(&stations), ["NYS", "GCT"]);
        assert_eq!(
            stations[0],
            Station::new("st001", "Union Station", "New York", "NYS")
        );
    }

    #[test]
    fn filter_by_code_ignores_case() {
        let stations = list(None, Some("chi"));
        assert_eq!(
            stations,
            [Station::new("st002", "Central Station", "Chicago", "CHI")]
        );
    }

    #[test]
    fn filter_by_both() {
        assert_eq!(codes(&list(Some("new york"), Some("gct"))), ["GCT"]);
        assert!(list(Some("New York"), Some("CHI")).is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(list(Some("Nowhere"), None).is_empty());
    }

    #[test]
    fn blank_params_return_everything() {
        assert_eq!(list(Some("  "), Some("")).len(), 6);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let dataset = StationDataset::from_records(vec![
            json!({"id": "st001", "name": "Union Station", "city": "New York", "code": "NYS"}),
            json!({"id": "st002", "name": "Central Station", "city": "Chicago"}),
            json!({"id": "st003", "name": "   ", "city": "New York", "code": "GCT"}),
            json!({"id": 4, "name": "Union Station", "city": "Washington", "code": "WAS"}),
            json!("st005"),
            Value::Null,
            json!({"id": "st006", "name": "South Station", "city": "Boston", "code": "BOS"}),
        ]);

        let stations = list_stations(&dataset, &StationFilter::default()).unwrap();
        assert_eq!(codes(&stations), ["NYS", "BOS"]);

        let stations =
            list_stations(&dataset, &StationFilter::from_params(Some("New York"), None)).unwrap();
        assert_eq!(codes(&stations), ["NYS"]);
    }

    #[test]
    fn source_failure_is_an_error() {
        let err = list_stations(&BrokenSource, &StationFilter::default()).unwrap_err();
        assert!(matches!(err, DirectoryError::Source(_)));
    }

    #[test]
    fn repeated_calls_agree() {
        let dataset = StationDataset::builtin();
        let filter = StationFilter::from_params(Some("new york"), None);
        let first = list_stations(&dataset, &filter).unwrap();
        let second = list_stations(&dataset, &filter).unwrap();
        assert_eq!(first, second);
    }
}
