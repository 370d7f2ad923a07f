//! Accounts Domain
//!
//! Portal users are provisioned out of band; this crate only models the
//! stored account and the login-time credential comparison.

pub mod error;
pub mod user;

pub use error::AccountError;
pub use user::{hash_password, User};
