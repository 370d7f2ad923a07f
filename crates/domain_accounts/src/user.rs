//! Portal user accounts

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Utc};

use crate::error::AccountError;
use core_kernel::UserId;

/// A portal user
///
/// Users are read-only in this codebase: the only operation against an
/// account is the login-time password comparison.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Login email, unique per user
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Whether the user can see the admin views
    pub is_admin: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Compares a submitted password against the stored hash
    pub fn verify_password(&self, candidate: &str) -> Result<bool, AccountError> {
        Ok(verify(candidate, &self.password_hash)?)
    }
}

/// Hashes a plaintext password for storage
///
/// Used by seeding scripts and test fixtures; the service itself never
/// creates accounts.
pub fn hash_password(password: &str) -> Result<String, AccountError> {
    Ok(hash(password, DEFAULT_COST)?)
}
