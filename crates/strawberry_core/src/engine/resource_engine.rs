//! Resource engine contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide concurrency-safe keyed storage for resources.
//! - Report missing keys as `EngineError::NotFound`.
//!
//! # Invariants
//! - At most one resource exists per id; create overwrites on collision.
//! - Writers are mutually exclusive; readers observe whole writes only.
//! - Two `list_resources` calls with no write in between return the same
//!   resources in the same order.

use crate::model::resource::{Resource, ResourceId, ResourceValidationError};
use log::{debug, info};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type EngineResult<T> = Result<T, EngineError>;

/// Error vocabulary shared by every engine and the service above it.
#[derive(Debug)]
pub enum EngineError {
    /// No resource is stored under the id.
    NotFound(ResourceId),
    /// Required resource fields are missing.
    InvalidInput(ResourceValidationError),
    /// Backend fault. The in-memory engine never produces this.
    Internal(String),
}

impl EngineError {
    /// Returns whether this error reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "resource not found: {id}"),
            Self::InvalidInput(err) => write!(f, "invalid resource: {err}"),
            Self::Internal(message) => write!(f, "engine failure: {message}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Internal(_) => None,
        }
    }
}

impl From<ResourceValidationError> for EngineError {
    fn from(value: ResourceValidationError) -> Self {
        Self::InvalidInput(value)
    }
}

/// Storage contract for resources.
///
/// `limit <= 0` on `list_resources` means "no limit".
pub trait ResourceEngine: Send + Sync {
    fn create_resource(&self, resource: &Resource) -> EngineResult<ResourceId>;
    fn get_resource(&self, id: &str) -> EngineResult<Resource>;
    fn list_resources(&self, limit: i64) -> EngineResult<Vec<Resource>>;
    fn delete_resource(&self, id: &str) -> EngineResult<()>;
}

impl<E: ResourceEngine + ?Sized> ResourceEngine for Box<E> {
    fn create_resource(&self, resource: &Resource) -> EngineResult<ResourceId> {
        (**self).create_resource(resource)
    }

    fn get_resource(&self, id: &str) -> EngineResult<Resource> {
        (**self).get_resource(id)
    }

    fn list_resources(&self, limit: i64) -> EngineResult<Vec<Resource>> {
        (**self).list_resources(limit)
    }

    fn delete_resource(&self, id: &str) -> EngineResult<()> {
        (**self).delete_resource(id)
    }
}

impl<E: ResourceEngine + ?Sized> ResourceEngine for Arc<E> {
    fn create_resource(&self, resource: &Resource) -> EngineResult<ResourceId> {
        (**self).create_resource(resource)
    }

    fn get_resource(&self, id: &str) -> EngineResult<Resource> {
        (**self).get_resource(id)
    }

    fn list_resources(&self, limit: i64) -> EngineResult<Vec<Resource>> {
        (**self).list_resources(limit)
    }

    fn delete_resource(&self, id: &str) -> EngineResult<()> {
        (**self).delete_resource(id)
    }
}

/// Converts a signed list limit into an optional cap.
///
/// Zero and negative values disable truncation.
pub fn normalize_list_limit(limit: i64) -> Option<usize> {
    if limit <= 0 {
        return None;
    }
    Some(usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Process-local engine backed by a lock-guarded hash map.
///
/// State lives as long as the engine value; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryResourceEngine {
    resources: RwLock<HashMap<ResourceId, Resource>>,
}

impl InMemoryResourceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resident resources.
    pub fn len(&self) -> usize {
        self.resources.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.read().is_empty()
    }
}

impl ResourceEngine for InMemoryResourceEngine {
    fn create_resource(&self, resource: &Resource) -> EngineResult<ResourceId> {
        resource.validate_for_storage()?;

        let replaced = self
            .resources
            .write()
            .insert(resource.id.clone(), resource.clone())
            .is_some();

        info!(
            "event=resource_create module=engine status=ok engine=memory id={} replaced={}",
            resource.id, replaced
        );
        Ok(resource.id.clone())
    }

    fn get_resource(&self, id: &str) -> EngineResult<Resource> {
        let found = self.resources.read().get(id).cloned();
        match found {
            Some(resource) => Ok(resource),
            None => {
                debug!("event=resource_get module=engine status=not_found engine=memory id={id}");
                Err(EngineError::NotFound(id.to_string()))
            }
        }
    }

    fn list_resources(&self, limit: i64) -> EngineResult<Vec<Resource>> {
        let cap = normalize_list_limit(limit);
        let resources = self.resources.read();
        let items: Vec<Resource> = match cap {
            Some(cap) => resources.values().take(cap).cloned().collect(),
            None => resources.values().cloned().collect(),
        };
        drop(resources);

        debug!(
            "event=resource_list module=engine status=ok engine=memory limit={} count={}",
            limit,
            items.len()
        );
        Ok(items)
    }

    fn delete_resource(&self, id: &str) -> EngineResult<()> {
        let removed = self.resources.write().remove(id);
        if removed.is_none() {
            debug!("event=resource_delete module=engine status=not_found engine=memory id={id}");
            return Err(EngineError::NotFound(id.to_string()));
        }

        info!("event=resource_delete module=engine status=ok engine=memory id={id}");
        Ok(())
    }
}
