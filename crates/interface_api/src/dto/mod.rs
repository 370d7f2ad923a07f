//! Request/Response data transfer objects
//!
//! The wire format is camelCase JSON, matching the frontend the portal
//! already ships.

pub mod auth;
pub mod claims;
pub mod notifications;
