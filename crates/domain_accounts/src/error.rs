//! Account domain errors

use thiserror::Error;

/// Errors that can occur in the accounts domain
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}
