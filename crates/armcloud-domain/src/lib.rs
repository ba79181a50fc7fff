pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{CloudEnvironment, CloudName, ServiceEndpoint, ServiceName, WellKnownCloud};
