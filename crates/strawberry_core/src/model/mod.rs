//! Registry domain model.
//!
//! # Responsibility
//! - Define the canonical resource record exchanged by engine and service.
//!
//! # Invariants
//! - Every stored resource is identified by a non-empty `ResourceId`.
//! - Resources are immutable once stored; deletion is a hard delete.

pub mod resource;
