//! Outbound status notifications
//!
//! The claims domain only knows that a status change can be announced to
//! the claimant; how (or whether) the message actually goes out is up to
//! the adapter behind the port.

use async_trait::async_trait;

use crate::status::ClaimStatus;
use core_kernel::{DomainPort, PortError};

/// A status-change announcement addressed to the claimant
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    /// Destination email address
    pub recipient: String,
    /// Claim number the update refers to
    pub claim_number: String,
    /// The status the claim moved to
    pub new_status: ClaimStatus,
}

/// Port for delivering status updates to claimants
#[async_trait]
pub trait StatusNotifier: DomainPort {
    /// Delivers (or records) a status-change notification
    async fn notify_status_change(&self, update: StatusUpdate) -> Result<(), PortError>;
}
