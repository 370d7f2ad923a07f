//! Claim entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::ClaimStatus;
use core_kernel::ClaimId;

/// A customer claim filed against an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Human-facing claim number
    pub claim_number: String,
    /// Order the claim was filed against
    pub order_number: String,
    /// Contact email of the claimant
    pub email: String,
    /// Claimant name
    pub full_name: Option<String>,
    /// Claimant phone
    pub phone: Option<String>,
    /// What went wrong, in the customer's words
    pub description: Option<String>,
    /// Current status
    pub status: ClaimStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Files a new claim
    ///
    /// New claims always start out `Pending`, whatever the caller may have
    /// supplied for the status field.
    pub fn file(order_number: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        let id = ClaimId::new_v7();

        Self {
            id,
            claim_number: generate_claim_number(&id, now),
            order_number: order_number.into(),
            email: email.into(),
            full_name: None,
            phone: None,
            description: None,
            status: ClaimStatus::Pending,
            created_at: now,
            updated_at: now,
        }
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

    /// Sets the claim description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A partial update to a claim
///
/// `None` fields are left untouched; the portal applies whatever the client
/// sent and nothing more. No transition rules are enforced on `status`.
#[derive(Debug, Clone, Default)]
pub struct ClaimPatch {
    pub order_number: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub status: Option<ClaimStatus>,
}

impl ClaimPatch {
    /// Returns true when the patch carries no changes
    pub fn is_empty(&self) -> bool {
        self.order_number.is_none()
            && self.email.is_none()
            && self.full_name.is_none()
            && self.phone.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}

/// Generates a claim number in the `CLM-YYYY-NNNNNNN` format
fn generate_claim_number(id: &ClaimId, now: DateTime<Utc>) -> String {
    format!(
        "CLM-{}-{:07}",
        now.format("%Y"),
        id.as_uuid().as_fields().0 % 10_000_000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_start_pending() {
        let claim = Claim::file("ORD-1001", "jane@example.com");

        assert!(claim.status.is_pending());
        assert_eq!(claim.order_number, "ORD-1001");
        assert_eq!(claim.email, "jane@example.com");
        assert!(claim.full_name.is_none());
        assert_eq!(claim.created_at, claim.updated_at);
    }

    #[test]
    fn test_claim_number_format() {
        let claim = Claim::file("ORD-1001", "jane@example.com");
        let year = Utc::now().format("%Y").to_string();

        assert!(claim.claim_number.starts_with(&format!("CLM-{year}-")));
        assert_eq!(claim.claim_number.len(), "CLM-2024-0000000".len());
    }

    #[test]
    fn test_builder_setters() {
        let claim = Claim::file("ORD-1001", "jane@example.com")
            .with_full_name("Jane Doe")
            .with_phone("+1 555 0100")
            .with_description("Arrived cracked");

        assert_eq!(claim.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(claim.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(claim.description.as_deref(), Some("Arrived cracked"));
    }

    #[test]
    fn test_empty_patch() {
        assert!(ClaimPatch::default().is_empty());

        let patch = ClaimPatch {
            status: Some(ClaimStatus::Approved),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
