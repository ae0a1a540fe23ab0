//! Storage engine contract and implementations.
//!
//! # Responsibility
//! - Define the create/get/list/delete contract every backing store honors.
//! - Keep storage details out of the service layer.
//!
//! # Invariants
//! - Engines own the resident copy of every resource; reads return clones.
//! - Engines return semantic errors (`NotFound`) rather than panicking.

pub mod resource_engine;
