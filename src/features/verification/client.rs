//! Email verification endpoints. Codes arrive out-of-band by email; settling
//! one lifts the 403 gate on write endpoints. Codes must never be logged.

use serde::Serialize;

use crate::app_lib::{ApiEnvelope, AppError, post_json_with_credentials};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyEmailRequest {
    user_id: String,
    code: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResendVerificationRequest {
    user_id: String,
}

/// Settles the emailed verification code for the given account.
pub async fn verify_email(user_id: &str, code: &str) -> Result<(), AppError> {
    let request = VerifyEmailRequest {
        user_id: user_id.to_string(),
        code: code.trim().to_string(),
    };
    let envelope: ApiEnvelope<serde_json::Value> =
        post_json_with_credentials("/email-verification/verify", &request).await?;
    envelope.into_ack()
}

/// Requests a fresh verification email for the given account.
pub async fn resend_verification(user_id: &str) -> Result<(), AppError> {
    let request = ResendVerificationRequest {
        user_id: user_id.to_string(),
    };
    let envelope: ApiEnvelope<serde_json::Value> =
        post_json_with_credentials("/email-verification/resend", &request).await?;
    envelope.into_ack()
}
