//! Station records and their structural validation.

use serde::Serialize;
use serde_json::Value;

/// Keys every station record must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "city", "code"];

/// A single rail station.
///
/// Serializes to an object with exactly the keys `id`, `name`, `city`
/// and `code`. Values obtained through [`Station::from_value`] are
/// guaranteed to be non-empty after trimming.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use station_server::domain::Station;
///
/// let record = json!({"id": "st001", "name": "Union Station", "city": "New York", "code": "NYS"});
/// let station = Station::from_value(&record).unwrap();
/// assert_eq!(station.code, "NYS");
///
/// // Whitespace-only values are rejected
/// let record = json!({"id": "st001", "name": "  ", "city": "New York", "code": "NYS"});
/// assert!(Station::from_value(&record).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub city: String,
    pub code: String,
}

impl Station {
    /// Create a station from its four fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            code: code.into(),
        }
    }

    /// Build a typed station from an untyped record.
    ///
    /// Returns `None` if the record fails [`is_valid_station`]. Extra keys
    /// are ignored. Values are kept exactly as stored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let field = |key: &str| non_blank_str(value.get(key)?).map(str::to_owned);

        Some(Self {
            id: field("id")?,
            name: field("name")?,
            city: field("city")?,
            code: field("code")?,
        })
    }
}

/// Check that a record has the shape of a station.
///
/// True iff `value` is an object holding every key in [`REQUIRED_FIELDS`],
/// each mapped to a string that is non-empty after trimming. Any other
/// input, including non-objects, returns false.
pub fn is_valid_station(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };

    REQUIRED_FIELDS
        .iter()
        .all(|key| object.get(*key).and_then(non_blank_str).is_some())
}

fn non_blank_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}
