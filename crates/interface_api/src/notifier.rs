//! Status-update notifier adapters

use async_trait::async_trait;
use tracing::info;

use core_kernel::{DomainPort, PortError};
use domain_claims::{StatusNotifier, StatusUpdate};

/// Log-only notifier
///
/// Email delivery is not wired up; this adapter records what would have
/// been sent and reports success, matching the portal's stubbed
/// notification endpoint.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl DomainPort for LogNotifier {}

#[async_trait]
impl StatusNotifier for LogNotifier {
    async fn notify_status_change(&self, update: StatusUpdate) -> Result<(), PortError> {
        info!(
            to = %update.recipient,
            claim_number = %update.claim_number,
            new_status = %update.new_status,
            "Status update email (delivery stubbed, nothing sent)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::ClaimStatus;

    #[tokio::test]
    async fn test_log_notifier_always_succeeds() {
        let notifier = LogNotifier;
        let update = StatusUpdate {
            recipient: "jane@example.com".to_string(),
            claim_number: "CLM-2024-0001234".to_string(),
            new_status: ClaimStatus::Approved,
        };

        assert!(notifier.notify_status_change(update).await.is_ok());
    }
}
