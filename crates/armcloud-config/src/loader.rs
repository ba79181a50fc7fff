use std::collections::BTreeMap;
use std::path::Path;

use armcloud_domain::{CloudEnvironment, CloudName, ServiceEndpoint, ServiceName};
use tracing::debug;

use crate::error::ConfigError;
use crate::raw::RawCloudMetadata;

/// Parse a cloud metadata document into one [`CloudEnvironment`] per record.
///
/// The document is a JSON array. Output order matches input order and no
/// record is dropped: a record without `resourceManager` still yields a
/// `resourceManager` service, with an empty endpoint.
pub fn parse_metadata(document: &[u8]) -> Result<Vec<CloudEnvironment>, ConfigError> {
    let raw: Vec<RawCloudMetadata> = serde_json::from_slice(document)?;
    Ok(raw.into_iter().map(convert_cloud).collect())
}

/// Read a metadata document from disk and parse it.
pub fn load_metadata_file(path: &Path) -> Result<Vec<CloudEnvironment>, ConfigError> {
    let content = std::fs::read(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!("Loading cloud metadata from {}", path.display());
    parse_metadata(&content).map_err(|e| match e {
        ConfigError::Decode(source) => ConfigError::DecodeFile {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

fn convert_cloud(raw: RawCloudMetadata) -> CloudEnvironment {
    if raw.name.is_empty() {
        debug!("cloud metadata record has an empty name");
    }

    let (login_endpoint, audiences) = match raw.authentication {
        Some(auth) => (
            auth.login_endpoint.unwrap_or_default(),
            auth.audiences.unwrap_or_default(),
        ),
        None => (String::new(), Vec::new()),
    };

    let endpoint = raw.resource_manager.unwrap_or_default();
    if endpoint.is_empty() {
        debug!("cloud '{}' has no resourceManager endpoint", raw.name);
    }

    let mut services = BTreeMap::new();
    services.insert(
        ServiceName::ResourceManager,
        ServiceEndpoint { audiences, endpoint },
    );

    CloudEnvironment {
        name: CloudName::new(raw.name),
        login_endpoint,
        services,
    }
}
