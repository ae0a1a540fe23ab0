//! Core use-case services.
//!
//! # Responsibility
//! - Put identifier minting and input checks in front of an engine.
//! - Keep transport callers decoupled from storage details.

pub mod resource_service;
