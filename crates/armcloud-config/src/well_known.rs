use std::collections::BTreeMap;

use armcloud_domain::{CloudEnvironment, WellKnownCloud};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::ConfigError;
use crate::loader::parse_metadata;

/// Metadata for the public, US Government and China clouds, in the shape
/// served by `/metadata/endpoints`.
pub const EMBEDDED_METADATA: &str = include_str!("metadata/well_known.json");

static WELL_KNOWN: OnceCell<WellKnownClouds> = OnceCell::new();

/// The process-wide well-known cloud table.
///
/// Built from [`EMBEDDED_METADATA`] on the first successful call and shared
/// read-only afterwards. A failure is returned to the caller and nothing is
/// cached, so every later call reports the same error.
pub fn well_known() -> Result<&'static WellKnownClouds, ConfigError> {
    WELL_KNOWN.get_or_try_init(WellKnownClouds::from_embedded)
}

/// Resolved configuration for every [`WellKnownCloud`].
///
/// Always holds all three entries; construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellKnownClouds {
    clouds: BTreeMap<WellKnownCloud, CloudEnvironment>,
}

impl WellKnownClouds {
    pub fn from_embedded() -> Result<Self, ConfigError> {
        let envs = parse_metadata(EMBEDDED_METADATA.as_bytes())?;
        Self::from_metadata(envs)
    }

    /// Keep the environments whose metadata name maps to a well-known cloud.
    /// Other names are dropped; they stay reachable through
    /// [`parse_metadata`] directly.
    pub fn from_metadata(envs: Vec<CloudEnvironment>) -> Result<Self, ConfigError> {
        let mut clouds = BTreeMap::new();
        for env in envs {
            match WellKnownCloud::from_source_name(env.name.as_str()) {
                Some(cloud) => {
                    clouds.insert(cloud, env);
                }
                None => debug!("'{}' is not a well-known cloud, skipping", env.name),
            }
        }

        if let Some(missing) = WellKnownCloud::ALL.into_iter().find(|c| !clouds.contains_key(c)) {
            return Err(ConfigError::MissingWellKnown(missing));
        }

        Ok(Self { clouds })
    }

    pub fn get(&self, cloud: WellKnownCloud) -> &CloudEnvironment {
        &self.clouds[&cloud]
    }

    pub fn iter(&self) -> impl Iterator<Item = (WellKnownCloud, &CloudEnvironment)> {
        self.clouds.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }
}
