//! Core domain logic for the Strawberry resource registry.
//! This crate owns resource storage and the id-minting service on top of it.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{open_engine, ConfigError, EngineKind, RegistryConfig};
pub use engine::resource_engine::{
    normalize_list_limit, EngineError, EngineResult, InMemoryResourceEngine, ResourceEngine,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::resource::{Location, Resource, ResourceId, ResourceValidationError};
pub use service::resource_service::ResourceService;

/// Minimal health-check API for transport liveness probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
