//! Resource use-case service.
//!
//! # Responsibility
//! - Mint a fresh id for every created resource.
//! - Forward reads and deletes to the injected engine.
//!
//! # Invariants
//! - Client-supplied ids are always discarded on create.
//! - Engine errors are returned unchanged.
//! - The service holds no shared mutable state of its own.

use crate::engine::resource_engine::{EngineResult, ResourceEngine};
use crate::model::resource::{Resource, ResourceId};
use log::warn;
use uuid::Uuid;

/// Use-case service wrapper over one resource engine.
pub struct ResourceService<E: ResourceEngine> {
    engine: E,
}

impl<E: ResourceEngine> ResourceService<E> {
    /// Creates a service fronting the provided engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Returns the engine this service delegates to.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Stores a new resource under a freshly minted id.
    ///
    /// # Contract
    /// - Any `id` on the input is overwritten with a UUID v4 string.
    /// - Returns `InvalidInput` without touching the engine when required
    ///   fields are missing.
    /// - Returns the minted id.
    pub fn create_resource(&self, mut resource: Resource) -> EngineResult<ResourceId> {
        if let Err(err) = resource.validate() {
            warn!("event=resource_create module=service status=rejected reason={err}");
            return Err(err.into());
        }

        resource.id = Uuid::new_v4().to_string();
        self.engine.create_resource(&resource)
    }

    /// Gets one resource by id.
    pub fn get_resource(&self, id: &str) -> EngineResult<Resource> {
        self.engine.get_resource(id)
    }

    /// Lists stored resources; `limit <= 0` returns all of them.
    pub fn list_resources(&self, limit: i64) -> EngineResult<Vec<Resource>> {
        self.engine.list_resources(limit)
    }

    /// Deletes one resource by id.
    ///
    /// A missing id yields `NotFound`; callers decide whether to surface it.
    pub fn delete_resource(&self, id: &str) -> EngineResult<()> {
        self.engine.delete_resource(id)
    }
}
