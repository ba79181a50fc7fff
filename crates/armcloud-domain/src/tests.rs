use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::types::*;

fn env_with(endpoint: &str, audiences: &[&str]) -> CloudEnvironment {
    let mut services = BTreeMap::new();
    services.insert(
        ServiceName::ResourceManager,
        ServiceEndpoint {
            audiences: audiences.iter().map(|a| a.to_string()).collect(),
            endpoint: endpoint.to_string(),
        },
    );
    CloudEnvironment {
        name: CloudName::new("Test"),
        login_endpoint: "https://login.example/".into(),
        services,
    }
}

#[test]
fn well_known_source_names() {
    assert_eq!(WellKnownCloud::AzureChina.source_name(), "AzureChinaCloud");
    assert_eq!(WellKnownCloud::AzurePublicCloud.source_name(), "AzureCloud");
    assert_eq!(WellKnownCloud::AzureGovernment.source_name(), "AzureUSGovernment");
}

#[test]
fn from_source_name_is_inverse() {
    for cloud in WellKnownCloud::ALL {
        assert_eq!(WellKnownCloud::from_source_name(cloud.source_name()), Some(cloud));
    }
    assert_eq!(WellKnownCloud::from_source_name("AzureStack"), None);
    assert_eq!(WellKnownCloud::from_source_name("azurecloud"), None);
}

#[test]
fn parse_cloud_aliases() {
    assert_eq!("public".parse::<WellKnownCloud>().unwrap(), WellKnownCloud::AzurePublicCloud);
    assert_eq!("AzureCloud".parse::<WellKnownCloud>().unwrap(), WellKnownCloud::AzurePublicCloud);
    assert_eq!("usgov".parse::<WellKnownCloud>().unwrap(), WellKnownCloud::AzureGovernment);
    assert_eq!("AzureChina".parse::<WellKnownCloud>().unwrap(), WellKnownCloud::AzureChina);
    assert!(matches!(
        "mars".parse::<WellKnownCloud>(),
        Err(DomainError::UnknownCloud(s)) if s == "mars"
    ));
}

#[test]
fn service_name_serializes_as_resource_manager() {
    assert_eq!(ServiceName::ResourceManager.to_string(), "resourceManager");
    let json = serde_json::to_string(&ServiceName::ResourceManager).unwrap();
    assert_eq!(json, "\"resourceManager\"");
}

#[test]
fn default_scope_trims_trailing_slash() {
    let env = env_with("https://management.azure.com/", &["https://management.azure.com/"]);
    assert_eq!(
        env.resource_manager_scope().unwrap(),
        "https://management.azure.com/.default"
    );
}

#[test]
fn default_scope_uses_first_audience() {
    let ep = ServiceEndpoint {
        audiences: vec![
            "https://management.chinacloudapi.cn".into(),
            "https://management.core.chinacloudapi.cn/".into(),
        ],
        endpoint: "https://management.chinacloudapi.cn/".into(),
    };
    assert_eq!(
        ep.default_scope().as_deref(),
        Some("https://management.chinacloudapi.cn/.default")
    );
}

#[test]
fn default_scope_keeps_explicit_default() {
    let ep = ServiceEndpoint {
        audiences: vec!["api://arm/.default".into()],
        endpoint: "https://arm.example/".into(),
    };
    assert_eq!(ep.default_scope().as_deref(), Some("api://arm/.default"));
}

#[test]
fn empty_endpoint_is_not_usable() {
    let env = env_with("", &["aud-1"]);
    let entry = env.service(ServiceName::ResourceManager).unwrap();
    assert!(!entry.is_configured());
    assert!(matches!(
        env.resource_manager(),
        Err(DomainError::EmptyEndpoint { service: ServiceName::ResourceManager, .. })
    ));
}

#[test]
fn missing_service_is_reported() {
    let env = CloudEnvironment {
        name: CloudName::new("Bare"),
        login_endpoint: String::new(),
        services: BTreeMap::new(),
    };
    let err = env.resource_manager().unwrap_err();
    assert_eq!(err.to_string(), "cloud 'Bare' has no resourceManager service configured");
}

#[test]
fn scope_without_audience_fails() {
    let env = env_with("https://arm.example/", &[]);
    assert!(matches!(env.resource_manager_scope(), Err(DomainError::NoAudience { .. })));
}
