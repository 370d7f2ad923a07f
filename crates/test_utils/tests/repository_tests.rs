//! CRUD acceptance tests against a containerized PostgreSQL
//!
//! These tests need Docker and are ignored by default:
//!
//! ```bash
//! cargo test -p test_utils -- --ignored
//! ```
//!
//! The shared container is reused across tests; every test works with its
//! own order numbers and emails so ordering does not matter.

use domain_claims::{ClaimPatch, ClaimStatus};
use infra_db::{ClaimsRepository, UserRepository};
use test_utils::fixtures::StringFixtures;
use test_utils::{get_shared_test_database, seed_user, TestClaimBuilder, TestUserBuilder};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_claim_and_read_back() {
    let db = get_shared_test_database().await;
    let repo = ClaimsRepository::new(db.pool().clone());

    let claim = TestClaimBuilder::new()
        .with_order_number(StringFixtures::random_order_number())
        .with_email(StringFixtures::random_email())
        .build();
    let created = repo.create(&claim).await.unwrap();

    assert_eq!(created.status, "Pending");
    assert_eq!(created.order_number, claim.order_number);
    assert_eq!(created.claim_number, claim.claim_number);

    let fetched = repo.get_by_id(*claim.id.as_uuid()).await.unwrap();
    assert_eq!(fetched.email, claim.email);
    assert_eq!(fetched.description, claim.description);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_patch_updates_only_supplied_fields() {
    let db = get_shared_test_database().await;
    let repo = ClaimsRepository::new(db.pool().clone());

    let claim = TestClaimBuilder::new()
        .with_order_number(StringFixtures::random_order_number())
        .with_email(StringFixtures::random_email())
        .build();
    repo.create(&claim).await.unwrap();

    let patch = ClaimPatch {
        status: Some(ClaimStatus::Approved),
        description: Some("Replacement shipped".to_string()),
        ..Default::default()
    };
    let updated = repo.update(*claim.id.as_uuid(), &patch).await.unwrap();

    assert_eq!(updated.status, "Approved");
    assert_eq!(updated.description.as_deref(), Some("Replacement shipped"));
    // Untouched fields keep their stored values
    assert_eq!(updated.order_number, claim.order_number);
    assert_eq!(updated.email, claim.email);
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_free_form_status_survives_storage() {
    let db = get_shared_test_database().await;
    let repo = ClaimsRepository::new(db.pool().clone());

    let claim = TestClaimBuilder::new()
        .with_order_number(StringFixtures::random_order_number())
        .build();
    repo.create(&claim).await.unwrap();

    let patch = ClaimPatch {
        status: Some("Waiting on courier".parse().unwrap()),
        ..Default::default()
    };
    let updated = repo.update(*claim.id.as_uuid(), &patch).await.unwrap();

    assert_eq!(updated.status, "Waiting on courier");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_unknown_claim_is_not_found() {
    let db = get_shared_test_database().await;
    let repo = ClaimsRepository::new(db.pool().clone());

    let result = repo
        .update(uuid::Uuid::new_v4(), &ClaimPatch::default())
        .await;

    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_filter_requires_both_order_and_email() {
    let db = get_shared_test_database().await;
    let repo = ClaimsRepository::new(db.pool().clone());

    let order_number = StringFixtures::random_order_number();
    let email = StringFixtures::random_email();

    let mine = TestClaimBuilder::new()
        .with_order_number(order_number.as_str())
        .with_email(email.as_str())
        .build();
    let someone_elses = TestClaimBuilder::new()
        .with_order_number(order_number.as_str())
        .with_email(StringFixtures::random_email())
        .build();
    repo.create(&mine).await.unwrap();
    repo.create(&someone_elses).await.unwrap();

    let found = repo
        .find_by_order_and_email(&order_number, &email)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].claim_id, *mine.id.as_uuid());

    let none = repo
        .find_by_order_and_email(&order_number, "other@example.com")
        .await
        .unwrap();
    assert!(none.is_empty());

    // The unfiltered listing sees both
    let all = repo.list_all().await.unwrap();
    assert!(all.len() >= 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_user_lookup_and_password_comparison() {
    let db = get_shared_test_database().await;
    let repo = UserRepository::new(db.pool().clone());

    let email = StringFixtures::random_email();
    let user = TestUserBuilder::new()
        .with_email(email.as_str())
        .with_password("portal-pw")
        .admin()
        .build();
    seed_user(db.pool(), &user).await.unwrap();

    let row = repo.find_by_email(&email).await.unwrap().unwrap();
    assert!(row.is_admin);

    let stored = domain_accounts::User::from(row);
    assert!(stored.verify_password("portal-pw").unwrap());
    assert!(!stored.verify_password("wrong").unwrap());

    assert!(repo
        .find_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
}
