//! Test data fixtures
//!
//! Small helpers producing realistic values for tests. Random values come
//! from the `fake` crate; fixed values are the ones the acceptance tests
//! assert against.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use uuid::Uuid;

/// String fixtures for claims and accounts
pub struct StringFixtures;

impl StringFixtures {
    /// A fixed order number used across acceptance tests
    pub fn order_number() -> &'static str {
        "ORD-20240115-0042"
    }

    /// A fixed claimant email used across acceptance tests
    pub fn claimant_email() -> &'static str {
        "jane.doe@example.com"
    }

    /// A random order number
    pub fn random_order_number() -> String {
        format!("ORD-{}", Uuid::new_v4().simple())
    }

    /// A random email address
    pub fn random_email() -> String {
        SafeEmail().fake()
    }

    /// A random person name
    pub fn random_name() -> String {
        Name().fake()
    }

    /// A random phone number
    pub fn random_phone() -> String {
        PhoneNumber().fake()
    }

    /// A plausible claim description
    pub fn claim_description() -> &'static str {
        "Item arrived damaged, box was crushed on one side"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_fixtures_vary() {
        assert_ne!(
            StringFixtures::random_order_number(),
            StringFixtures::random_order_number()
        );
    }

    #[test]
    fn test_random_email_has_at_sign() {
        assert!(StringFixtures::random_email().contains('@'));
    }
}
