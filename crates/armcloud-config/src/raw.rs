use serde::{Deserialize, Serialize};

/// One record of a cloud metadata document (`/metadata/endpoints`).
///
/// Real documents carry many more fields (portal, graph, suffixes, ...);
/// they are not part of the model and are skipped by the decoder.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCloudMetadata {
    pub name: String,
    pub authentication: Option<RawAuthentication>,
    /// Absent for some private deployments.
    pub resource_manager: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuthentication {
    pub login_endpoint: Option<String>,
    pub audiences: Option<Vec<String>>,
}
