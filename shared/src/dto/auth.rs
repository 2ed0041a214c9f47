//! Registration, OTP, login and session DTOs.

use serde::{Deserialize, Serialize};

use super::user::{User, UserRole};

/// Signup payload for `POST /auth/register`.
///
/// `phone_number` must be canonicalized with
/// [`crate::utils::normalize_phone`] before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
}

/// Response to registration.
///
/// `otp` is a demo affordance of the current backend: the one-time passcode
/// is echoed straight back to the client instead of being delivered out of
/// band. Not a production-grade credential flow; kept because it is the
/// observed contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user: User,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// Payload for `POST /auth/otp/send`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpSendPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Response to an OTP send. `debug_code` is the same demo affordance as
/// [`RegisterResponse::otp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpSendResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_code: Option<String>,
}

/// Payload for `POST /auth/otp/verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyPayload {
    pub email: String,
    pub code: String,
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Session envelope returned by login, OTP verification, `GET /auth/session`
/// and `POST /auth/refresh`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: User,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable message out of the backend's two error keys.
    pub fn detail(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_payload_serializes_camel_case() {
        let payload = RegisterPayload {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "+919876543210".to_string(),
            password: "secret".to_string(),
            role: UserRole::Donor,
            blood_type: Some("O+".to_string()),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["firstName"], "Asha");
        assert_eq!(json["phoneNumber"], "+919876543210");
        assert_eq!(json["role"], "donor");
        assert_eq!(json["bloodType"], "O+");
    }

    #[test]
    fn test_register_response_otp_hint_is_optional() {
        let with_hint = r#"{
            "user": {
                "_id": "1", "firstName": "A", "lastName": "B",
                "email": "a@b.com", "phoneNumber": "+911234567890", "role": "donor"
            },
            "message": "registered",
            "otp": "123456"
        }"#;
        let resp: RegisterResponse = serde_json::from_str(with_hint).unwrap();
        assert_eq!(resp.otp.as_deref(), Some("123456"));

        let without_hint = r#"{
            "user": {
                "_id": "1", "firstName": "A", "lastName": "B",
                "email": "a@b.com", "phoneNumber": "+911234567890", "role": "donor"
            },
            "message": "registered"
        }"#;
        let resp: RegisterResponse = serde_json::from_str(without_hint).unwrap();
        assert!(resp.otp.is_none());
    }

    #[test]
    fn test_error_body_prefers_message_over_error() {
        let body = ApiErrorBody {
            message: Some("invalid credentials".to_string()),
            error: Some("Unauthorized".to_string()),
        };
        assert_eq!(body.detail(), Some("invalid credentials"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(body.detail(), Some("boom"));

        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail().is_none());
    }
}
