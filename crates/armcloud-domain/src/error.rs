use thiserror::Error;

use crate::types::{CloudName, ServiceName};

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("cloud '{cloud}' has no {service} service configured")]
    MissingService { cloud: CloudName, service: ServiceName },

    #[error("cloud '{cloud}' has an empty {service} endpoint")]
    EmptyEndpoint { cloud: CloudName, service: ServiceName },

    #[error("cloud '{cloud}' lists no audiences for {service}")]
    NoAudience { cloud: CloudName, service: ServiceName },

    #[error("unknown cloud: {0}")]
    UnknownCloud(String),
}
