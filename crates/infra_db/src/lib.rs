//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL access for the claims backend using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each repository owns a handle
//! to the connection pool and translates between database rows and domain
//! types, keeping SQL out of the domain and interface layers.
//!
//! Queries use the runtime-checked SQLx API with `FromRow` row types, so
//! the workspace builds without a database connection.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, ClaimsRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/claims")).await?;
//! let repo = ClaimsRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::claims::{ClaimRow, ClaimsRepository};
pub use repositories::users::{UserRepository, UserRow};
