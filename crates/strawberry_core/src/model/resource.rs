//! Resource domain model.
//!
//! # Responsibility
//! - Define the geotagged record stored by every engine implementation.
//! - Provide the required-field checks applied before persistence.
//!
//! # Invariants
//! - `id` is assigned by the service; client-supplied values are discarded.
//! - `kind` must not be blank on service create; engines store it as given.
//! - `location` is stored as given; no range validation is applied.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque resource identifier.
///
/// Ids minted by the service are hyphenated UUID v4 strings, but engines
/// treat them as arbitrary keys.
pub type ResourceId = String;

/// Validation errors for resource required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceValidationError {
    /// Engines refuse to key a resource by an empty id.
    EmptyId,
    /// `type` is empty or whitespace only.
    EmptyKind,
}

impl Display for ResourceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "resource id must not be empty"),
            Self::EmptyKind => write!(f, "resource type must not be empty"),
        }
    }
}

impl Error for ResourceValidationError {}

/// Geographic coordinate attached to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub lat: f32,
    pub lon: f32,
}

impl Location {
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }
}

/// Canonical registry record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Assigned at creation; missing on inbound payloads.
    #[serde(default)]
    pub id: ResourceId,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub location: Location,
    /// Caller-supplied point in time, serialized as `time` (RFC 3339).
    #[serde(rename = "time")]
    pub timestamp: DateTime<Utc>,
}

impl Resource {
    /// Creates a resource without an id.
    ///
    /// The id is filled in by `ResourceService::create_resource`.
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
        location: Location,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ResourceId::new(),
            kind: kind.into(),
            description: description.into(),
            location,
            timestamp,
        }
    }

    /// Creates a resource with a caller-provided id.
    ///
    /// Used by engine-level callers that key resources directly.
    ///
    /// # Errors
    /// - Returns `EmptyId` when `id` is empty. `kind` is not checked.
    pub fn with_id(
        id: impl Into<ResourceId>,
        kind: impl Into<String>,
        description: impl Into<String>,
        location: Location,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ResourceValidationError> {
        let mut resource = Self::new(kind, description, location, timestamp);
        resource.id = id.into();
        resource.validate_for_storage()?;
        Ok(resource)
    }

    /// Validates caller-supplied required fields.
    ///
    /// The id is not checked here because inbound payloads never carry a
    /// trusted one.
    pub fn validate(&self) -> Result<(), ResourceValidationError> {
        if self.kind.trim().is_empty() {
            return Err(ResourceValidationError::EmptyKind);
        }
        Ok(())
    }

    /// Validates a resource right before an engine keys it.
    ///
    /// Engines only need a usable key; payload fields are stored as given.
    pub fn validate_for_storage(&self) -> Result<(), ResourceValidationError> {
        if self.id.is_empty() {
            return Err(ResourceValidationError::EmptyId);
        }
        Ok(())
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Resource ID={} Type={} Description={} Location=({}, {}) Timestamp={}",
            self.id,
            self.kind,
            self.description,
            self.location.lat,
            self.location.lon,
            self.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}
