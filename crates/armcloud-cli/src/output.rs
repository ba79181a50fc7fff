use armcloud_config::WellKnownClouds;
use armcloud_domain::{CloudEnvironment, ServiceName};
use serde_json::{json, Value};

/// Render one environment as an indented block, optionally titled with its
/// well-known identifier.
pub fn render_environment(env: &CloudEnvironment, title: Option<&str>) -> String {
    let mut out = match title {
        Some(t) => format!("{} ({})\n", t, env.name),
        None => format!("{}\n", env.name),
    };
    out.push_str(&format!("  login:           {}\n", or_dash(&env.login_endpoint)));

    match env.service(ServiceName::ResourceManager) {
        Some(rm) if rm.is_configured() => {
            out.push_str(&format!("  resourceManager: {}\n", rm.endpoint));
        }
        _ => out.push_str("  resourceManager: (not configured)\n"),
    }

    if let Some(rm) = env.service(ServiceName::ResourceManager) {
        if !rm.audiences.is_empty() {
            out.push_str(&format!("  audiences:       {}\n", rm.audiences.join(", ")));
        }
    }
    if let Ok(scope) = env.resource_manager_scope() {
        out.push_str(&format!("  scope:           {}\n", scope));
    }
    out
}

pub fn render_environments(envs: &[CloudEnvironment]) -> String {
    if envs.is_empty() {
        return "No clouds.".to_string();
    }
    envs.iter()
        .map(|e| render_environment(e, None))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_well_known(table: &WellKnownClouds) -> String {
    table
        .iter()
        .map(|(cloud, env)| render_environment(env, Some(cloud.as_str())))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn well_known_json(table: &WellKnownClouds) -> Value {
    let map: serde_json::Map<String, Value> = table
        .iter()
        .map(|(cloud, env)| (cloud.to_string(), environment_json(env)))
        .collect();
    Value::Object(map)
}

pub fn environment_json(env: &CloudEnvironment) -> Value {
    json!({
        "name": env.name,
        "loginEndpoint": env.login_endpoint,
        "services": env.services,
        "scope": env.resource_manager_scope().ok(),
    })
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
