//! The in-memory station dataset.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Value, json};

use super::error::DatasetError;

/// Read access to the raw station records.
///
/// Records are untyped: a source may hold entries of any shape, and
/// callers are expected to validate each one before use.
pub trait StationSource: Send + Sync {
    /// All records, in dataset order.
    fn records(&self) -> Result<&[Value], DatasetError>;
}

/// Immutable collection of raw station records.
///
/// Built once at startup and shared between requests. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct StationDataset {
    records: Arc<[Value]>,
}

impl StationDataset {
    /// Create a dataset from raw records.
    pub fn from_records(records: Vec<Value>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The built-in mock dataset.
    pub fn builtin() -> Self {
        Self::from_records(vec![
            json!({"id": "st001", "name": "Union Station", "city": "New York", "code": "NYS"}),
            json!({"id": "st002", "name": "Central Station", "city": "Chicago", "code": "CHI"}),
            json!({"id": "st003", "name": "Grand Central Terminal", "city": "New York", "code": "GCT"}),
            json!({"id": "st004", "name": "Union Station", "city": "Washington", "code": "WAS"}),
            json!({"id": "st005", "name": "30th Street Station", "city": "Philadelphia", "code": "PHL"}),
            json!({"id": "st006", "name": "South Station", "city": "Boston", "code": "BOS"}),
        ])
    }

    /// Parse a dataset from a JSON document.
    ///
    /// The document must be an array. Its elements are kept as-is, even
    /// if they are not valid stations.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(json).map_err(|e| DatasetError::Json {
            message: e.to_string(),
        })?;

        match value {
            Value::Array(records) => Ok(Self::from_records(records)),
            _ => Err(DatasetError::NotAnArray),
        }
    }

    /// Load a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json_str(&json)
    }

    /// Number of raw records, valid or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StationSource for StationDataset {
    fn records(&self) -> Result<&[Value], DatasetError> {
        Ok(&self.records[..])
    }
}
