mod raw;
mod loader;
mod discovery;
mod well_known;
pub mod error;

pub use discovery::{metadata_url, MetadataClient, METADATA_API_VERSION};
pub use error::ConfigError;
pub use loader::{load_metadata_file, parse_metadata};
pub use well_known::{well_known, WellKnownClouds, EMBEDDED_METADATA};
