//! Status-update notification DTOs

use serde::{Deserialize, Serialize};

use domain_claims::ClaimStatus;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendStatusUpdateRequest {
    /// Destination email address
    pub to: String,
    pub claim_number: String,
    pub new_status: ClaimStatus,
}

#[derive(Debug, Serialize)]
pub struct SendStatusUpdateResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let request: SendStatusUpdateRequest = serde_json::from_str(
            r#"{"to":"jane@example.com","claimNumber":"CLM-2024-0000042","newStatus":"Approved"}"#,
        )
        .unwrap();

        assert_eq!(request.to, "jane@example.com");
        assert_eq!(request.claim_number, "CLM-2024-0000042");
        assert_eq!(request.new_status, ClaimStatus::Approved);
    }
}
