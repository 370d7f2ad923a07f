//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::Utc;

use core_kernel::UserId;
use domain_accounts::User;
use domain_claims::{Claim, ClaimStatus};

use crate::fixtures::StringFixtures;

/// Builder for test claims
pub struct TestClaimBuilder {
    order_number: String,
    email: String,
    full_name: Option<String>,
    phone: Option<String>,
    description: Option<String>,
    status: Option<ClaimStatus>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            order_number: StringFixtures::order_number().to_string(),
            email: StringFixtures::claimant_email().to_string(),
            full_name: Some(StringFixtures::random_name()),
            phone: None,
            description: Some(StringFixtures::claim_description().to_string()),
            status: None,
        }
    }

    /// Sets the order number
    pub fn with_order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_number = order_number.into();
        self
    }

    /// Sets the claimant email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the claimant name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Sets the claimant phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the status after filing
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        let mut claim = Claim::file(self.order_number, self.email);
        claim.full_name = self.full_name;
        claim.phone = self.phone;
        claim.description = self.description;
        if let Some(status) = self.status {
            claim.status = status;
        }
        claim
    }
}

/// Builder for test users
pub struct TestUserBuilder {
    email: String,
    password: String,
    is_admin: bool,
}

impl Default for TestUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUserBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            email: "support@example.com".to_string(),
            password: "test-password".to_string(),
            is_admin: false,
        }
    }

    /// Sets the login email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the plaintext password to hash into the account
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Marks the account as an admin
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    /// Builds the user
    ///
    /// Hashes with the bcrypt minimum cost to keep suites fast.
    pub fn build(self) -> User {
        User {
            id: UserId::new(),
            email: self.email,
            password_hash: bcrypt::hash(&self.password, 4).expect("bcrypt hash"),
            is_admin: self.is_admin,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_builder_defaults() {
        let claim = TestClaimBuilder::new().build();

        assert_eq!(claim.order_number, StringFixtures::order_number());
        assert!(claim.status.is_pending());
    }

    #[test]
    fn test_claim_builder_status_override() {
        let claim = TestClaimBuilder::new()
            .with_status(ClaimStatus::Approved)
            .build();

        assert_eq!(claim.status, ClaimStatus::Approved);
    }

    #[test]
    fn test_user_builder_password_verifies() {
        let user = TestUserBuilder::new().with_password("pw-123").build();

        assert!(user.verify_password("pw-123").unwrap());
        assert!(!user.verify_password("pw-124").unwrap());
    }
}
