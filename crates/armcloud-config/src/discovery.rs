use armcloud_domain::CloudEnvironment;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::loader::parse_metadata;

/// API version of the metadata endpoint that returns an array of clouds.
pub const METADATA_API_VERSION: &str = "2022-09-01";

/// Metadata URL served by a Resource Manager endpoint, e.g.
/// `https://management.local.azurestack.external/metadata/endpoints?api-version=2022-09-01`.
pub fn metadata_url(arm_endpoint: &str) -> String {
    format!(
        "{}/metadata/endpoints?api-version={}",
        arm_endpoint.trim_end_matches('/'),
        METADATA_API_VERSION
    )
}

/// Fetches cloud metadata from a live Resource Manager endpoint, for private
/// clouds such as Azure Stack that are not in the well-known table.
#[derive(Clone, Default)]
pub struct MetadataClient {
    client: reqwest::Client,
}

impl MetadataClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, arm_endpoint: &str) -> Result<Vec<CloudEnvironment>, ConfigError> {
        let url = metadata_url(arm_endpoint);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ConfigError::Http { url: url.clone(), source: e })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ConfigError::Status { url, status });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ConfigError::Http { url: url.clone(), source: e })?;
        let envs = parse_metadata(&body)?;
        info!("discovered {} cloud(s) at {}", envs.len(), arm_endpoint);
        Ok(envs)
    }
}
