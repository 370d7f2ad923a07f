//! Tests for the claims domain

use domain_claims::{Claim, ClaimPatch, ClaimStatus};

mod claim_tests {
    use super::*;

    fn file_test_claim() -> Claim {
        Claim::file("ORD-20240518-77", "sam@example.com")
            .with_full_name("Sam Carter")
            .with_description("Wrong color delivered")
    }

    #[test]
    fn test_filed_claim_defaults() {
        let claim = file_test_claim();

        assert_eq!(claim.status, ClaimStatus::Pending);
        assert!(claim.claim_number.starts_with("CLM-"));
        assert_eq!(claim.order_number, "ORD-20240518-77");
        assert_eq!(claim.email, "sam@example.com");
        assert!(claim.phone.is_none());
    }

    #[test]
    fn test_claim_numbers_are_distinct() {
        let a = Claim::file("ORD-1", "a@example.com");
        let b = Claim::file("ORD-1", "a@example.com");

        assert_ne!(a.id, b.id);
        assert_ne!(a.claim_number, b.claim_number);
    }

    #[test]
    fn test_claim_serde_roundtrip() {
        let claim = file_test_claim();
        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, claim.id);
        assert_eq!(back.status, claim.status);
        assert_eq!(back.description, claim.description);
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let claim = file_test_claim();
        let value: serde_json::Value = serde_json::to_value(&claim).unwrap();

        assert_eq!(value["status"], "Pending");
    }
}

mod status_tests {
    use super::*;

    #[test]
    fn test_every_named_status_roundtrips() {
        let statuses = vec![
            ClaimStatus::Pending,
            ClaimStatus::InReview,
            ClaimStatus::Approved,
            ClaimStatus::Denied,
            ClaimStatus::Resolved,
        ];

        for status in statuses {
            let parsed: ClaimStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_free_form_status_accepted() {
        // The portal never rejects a status it does not recognize
        let status: ClaimStatus = "Waiting on courier".parse().unwrap();
        assert!(!status.is_known());
        assert_eq!(status.as_str(), "Waiting on courier");
    }
}

mod patch_tests {
    use super::*;

    #[test]
    fn test_default_patch_is_empty() {
        assert!(ClaimPatch::default().is_empty());
    }

    #[test]
    fn test_patch_with_single_field() {
        let patch = ClaimPatch {
            description: Some("Now also missing the charger".to_string()),
            ..Default::default()
        };

        assert!(!patch.is_empty());
        assert!(patch.status.is_none());
    }
}
