use armcloud_domain::WellKnownCloud;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("metadata decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("metadata decode error in {path}: {source}")]
    DecodeFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("metadata document has no entry for well-known cloud {0}")]
    MissingWellKnown(WellKnownCloud),

    #[error("metadata request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("metadata request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}
