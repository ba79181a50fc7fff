use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::DomainError;

// ── Identifiers ──────────────────────────────────────────────────────────────

/// Name of a cloud environment as it appears in metadata, e.g. "AzureCloud"
/// or an arbitrary name for a private deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CloudName(pub String);

impl CloudName {
    pub fn new(s: impl Into<String>) -> Self {
        CloudName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CloudName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Enums ─────────────────────────────────────────────────────────────────────

/// Key into [`CloudEnvironment::services`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceName {
    #[serde(rename = "resourceManager")]
    ResourceManager,
}

impl ServiceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceName::ResourceManager => "resourceManager",
        }
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The clouds available without fetching metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WellKnownCloud {
    AzureChina,
    AzureGovernment,
    AzurePublicCloud,
}

impl WellKnownCloud {
    pub const ALL: [WellKnownCloud; 3] = [
        WellKnownCloud::AzurePublicCloud,
        WellKnownCloud::AzureGovernment,
        WellKnownCloud::AzureChina,
    ];

    /// The `name` this cloud carries in metadata documents.
    pub fn source_name(&self) -> &'static str {
        match self {
            WellKnownCloud::AzureChina => "AzureChinaCloud",
            WellKnownCloud::AzureGovernment => "AzureUSGovernment",
            WellKnownCloud::AzurePublicCloud => "AzureCloud",
        }
    }

    /// Inverse of [`source_name`](Self::source_name). Anything else is not well known.
    pub fn from_source_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.source_name() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WellKnownCloud::AzureChina => "AzureChina",
            WellKnownCloud::AzureGovernment => "AzureGovernment",
            WellKnownCloud::AzurePublicCloud => "AzurePublicCloud",
        }
    }
}

impl std::fmt::Display for WellKnownCloud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WellKnownCloud {
    type Err = DomainError;

    /// Accepts the identifier, the metadata source name, or a short alias,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "public" | "azurepubliccloud" | "azurecloud" => Ok(WellKnownCloud::AzurePublicCloud),
            "government" | "usgov" | "azuregovernment" | "azureusgovernment" => {
                Ok(WellKnownCloud::AzureGovernment)
            }
            "china" | "azurechina" | "azurechinacloud" => Ok(WellKnownCloud::AzureChina),
            _ => Err(DomainError::UnknownCloud(s.to_string())),
        }
    }
}

// ── Core structs ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Acceptable token audiences, in source order.
    pub audiences: Vec<String>,
    /// Base URL of the service's REST API. Empty when the source omitted it.
    pub endpoint: String,
}

impl ServiceEndpoint {
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// OAuth2 scope for the first listed audience, e.g.
    /// `https://management.azure.com/.default`.
    pub fn default_scope(&self) -> Option<String> {
        let audience = self.audiences.first()?;
        if audience.ends_with("/.default") {
            return Some(audience.clone());
        }
        Some(format!("{}/.default", audience.trim_end_matches('/')))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudEnvironment {
    pub name: CloudName,
    /// Authority used for token acquisition. Empty when the source omitted it.
    pub login_endpoint: String,
    pub services: BTreeMap<ServiceName, ServiceEndpoint>,
}

impl CloudEnvironment {
    pub fn service(&self, name: ServiceName) -> Option<&ServiceEndpoint> {
        self.services.get(&name)
    }

    /// The Resource Manager entry, usable as a client base URL.
    ///
    /// Fails when the entry is absent or its endpoint is empty, which is the
    /// case for private clouds whose metadata omits `resourceManager`.
    pub fn resource_manager(&self) -> Result<&ServiceEndpoint, DomainError> {
        let service = ServiceName::ResourceManager;
        let entry = self.service(service).ok_or_else(|| DomainError::MissingService {
            cloud: self.name.clone(),
            service,
        })?;
        if !entry.is_configured() {
            return Err(DomainError::EmptyEndpoint {
                cloud: self.name.clone(),
                service,
            });
        }
        Ok(entry)
    }

    /// Token scope for Resource Manager requests against this cloud.
    pub fn resource_manager_scope(&self) -> Result<String, DomainError> {
        self.resource_manager()?
            .default_scope()
            .ok_or_else(|| DomainError::NoAudience {
                cloud: self.name.clone(),
                service: ServiceName::ResourceManager,
            })
    }
}
