//! Login DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub email: String,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_wire_shape() {
        let response = LoginResponse {
            email: "admin@example.com".to_string(),
            is_admin: true,
        };
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["email"], "admin@example.com");
        assert_eq!(value["isAdmin"], true);
    }
}
