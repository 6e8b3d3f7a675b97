//! Request and response types for auth-related API calls. Credentials, TOTP
//! codes, and challenge tokens pass through these payloads, so they must
//! never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful `/login` call. A present `two_factor_token`
/// together with `requires_two_factor` means the password was accepted but a
/// second factor is still owed; tokens are short-lived and held in memory only.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(default)]
    pub requires_two_factor: bool,
    #[serde(default)]
    pub two_factor_token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Identifier of the freshly created account, consumed by the
/// email-verification flow. Older API deployments report it as `id`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    #[serde(default, alias = "id")]
    pub user_id: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorVerifyRequest {
    pub two_factor_token: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryVerifyRequest {
    pub two_factor_token: String,
    pub recovery_code: String,
}

/// Payload of a `/2fa/verify` call; the presence of `access_token` signals
/// success, not the envelope flag.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorData {
    #[serde(default)]
    pub requires_two_factor: bool,
    #[serde(default)]
    pub two_factor_token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Profile returned by `GET /user/me` to hydrate auth state. This mirrors the
/// cookie-backed session and contains no secrets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_data_reads_camel_case_challenge_fields() {
        let json = r#"{"requiresTwoFactor":true,"twoFactorToken":"tok1"}"#;
        let data: LoginData = serde_json::from_str(json).expect("Failed to deserialize");

        assert!(data.requires_two_factor);
        assert_eq!(data.two_factor_token.as_deref(), Some("tok1"));
        assert_eq!(data.access_token, None);
    }

    #[test]
    fn register_data_accepts_user_id_or_id() {
        let with_user_id: RegisterData =
            serde_json::from_str(r#"{"userId":"u7"}"#).expect("Failed to deserialize");
        let with_id: RegisterData =
            serde_json::from_str(r#"{"id":"u7"}"#).expect("Failed to deserialize");

        assert_eq!(with_user_id.user_id.as_deref(), Some("u7"));
        assert_eq!(with_id.user_id.as_deref(), Some("u7"));
    }

    #[test]
    fn user_profile_reads_email_verified_flag() {
        let json = r#"{"id":"u1","username":"ana","email":"a@x.com","emailVerified":true}"#;
        let profile: UserProfile = serde_json::from_str(json).expect("Failed to deserialize");

        assert_eq!(profile.id, "u1");
        assert_eq!(profile.username, "ana");
        assert!(profile.email_verified);
        assert_eq!(profile.avatar_url, None);
    }
}
