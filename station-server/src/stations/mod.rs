//! Station directory: the dataset and the queries over it.
//!
//! The dataset is loaded once at startup and never changes. Each listing
//! validates records as it reads them, so malformed entries are dropped
//! from responses rather than rejected at load time.

mod dataset;
mod directory;
mod error;
mod filter;

pub use dataset::{StationDataset, StationSource};
pub use directory::list_stations;
pub use error::{DatasetError, DirectoryError};
pub use filter::StationFilter;
