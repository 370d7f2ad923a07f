//! Core Kernel - Foundational types for the claims backend
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure layers:
//! - Strongly-typed identifiers for domain entities
//! - Ports-and-adapters plumbing for domain seams

pub mod identifiers;
pub mod ports;

pub use identifiers::{ClaimId, UserId};
pub use ports::{DomainPort, PortError};
