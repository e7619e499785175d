use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct VoteRequest {
    pub candidate_id: u32,
    pub voting_duration: f64,
}

#[derive(Deserialize, Debug)]
pub struct VoteResponse {
    pub success: bool,
    #[serde(default)]
    pub fraud_detected: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl VoteResponse {
    /// A fraud flag outranks any other failure detail.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else if self.fraud_detected {
            Err(ApiError::FraudFlagged {
                message: self.message,
            })
        } else {
            Err(ApiError::Rejected {
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_server_field_names() {
        let body = serde_json::to_value(VoteRequest {
            candidate_id: 2,
            voting_duration: 12.5,
        })
        .unwrap();
        assert_eq!(body["candidate_id"], 2);
        assert_eq!(body["voting_duration"], 12.5);
    }

    #[test]
    fn fraud_flag_defaults_to_false() {
        let response: VoteResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid candidate"}"#).unwrap();
        assert!(!response.fraud_detected);
        assert!(matches!(
            response.into_result(),
            Err(ApiError::Rejected { .. })
        ));
    }

    #[test]
    fn fraud_flag_is_its_own_outcome() {
        let response: VoteResponse = serde_json::from_str(
            r#"{"success": false, "fraud_detected": true,
                "message": "Suspicious voting activity detected by our security system!"}"#,
        )
        .unwrap();
        assert!(matches!(
            response.into_result(),
            Err(ApiError::FraudFlagged { .. })
        ));
    }
}
