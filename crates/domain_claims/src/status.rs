//! Claim status
//!
//! Statuses are stored as free-form strings; the portal never rejects a
//! status it does not recognize. The well-known values get named variants
//! and everything else round-trips through `Other` unchanged.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Status of a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    /// Freshly filed, awaiting triage
    Pending,
    /// Being looked at by support staff
    InReview,
    /// Accepted for replacement/refund
    Approved,
    /// Rejected
    Denied,
    /// Handled and closed out
    Resolved,
    /// Any status string the portal does not recognize
    Other(String),
}

impl ClaimStatus {
    /// Returns the canonical string form
    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::InReview => "In Review",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Denied => "Denied",
            ClaimStatus::Resolved => "Resolved",
            ClaimStatus::Other(s) => s,
        }
    }

    /// Returns true for a freshly filed claim
    pub fn is_pending(&self) -> bool {
        matches!(self, ClaimStatus::Pending)
    }

    /// Returns true when the status is one of the named variants
    pub fn is_known(&self) -> bool {
        !matches!(self, ClaimStatus::Other(_))
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ClaimStatus {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => ClaimStatus::Pending,
            "In Review" => ClaimStatus::InReview,
            "Approved" => ClaimStatus::Approved,
            "Denied" => ClaimStatus::Denied,
            "Resolved" => ClaimStatus::Resolved,
            other => ClaimStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ClaimStatus {
    fn from(s: String) -> Self {
        ClaimStatus::from(s.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClaimStatus::from(s))
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> String {
        status.as_str().to_string()
    }
}
