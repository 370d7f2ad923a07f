//! Test Utilities
//!
//! Shared fixtures, data builders, and the containerized Postgres harness
//! used by the integration suites.

pub mod builders;
pub mod database;
pub mod fixtures;

pub use builders::{TestClaimBuilder, TestUserBuilder};
pub use database::{
    create_isolated_test_database, get_shared_test_database, seed_user, TestDatabase,
};
