//! Gateway for the AutoStack auth endpoints. The trait is the seam the
//! session state machine is tested through; the HTTP implementation
//! centralizes cookie handling and envelope unwrapping so auth flows stay
//! consistent and route code never touches raw responses. Requests carry
//! credentials and challenge tokens and must never be logged.

use crate::app_lib::{
    ApiEnvelope, AppError, get_json_with_credentials, post_empty_json_with_credentials,
    post_empty_with_credentials, post_json_with_credentials,
};
use crate::features::auth::types::{
    LoginData, LoginRequest, RecoveryVerifyRequest, RegisterData, RegisterRequest, TwoFactorData,
    TwoFactorVerifyRequest, UserProfile,
};

/// Remote calls the session state machine depends on. Implemented over HTTP
/// in production and by scripted mocks in tests; the seam keeps the state
/// machine free of transport concerns.
// Single-threaded wasm target; Send bounds on the returned futures are irrelevant here.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginData, AppError>;
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterData, AppError>;
    async fn refresh_session(&self) -> Result<(), AppError>;
    async fn logout(&self) -> Result<(), AppError>;
    async fn verify_two_factor(
        &self,
        request: &TwoFactorVerifyRequest,
    ) -> Result<TwoFactorData, AppError>;
    async fn verify_recovery_code(
        &self,
        request: &RecoveryVerifyRequest,
    ) -> Result<TwoFactorData, AppError>;
    async fn fetch_current_user(&self) -> Result<UserProfile, AppError>;
}

/// Production gateway over the AutoStack REST API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    /// Exchanges credentials for a cookie session or a two-factor challenge.
    async fn login(&self, request: &LoginRequest) -> Result<LoginData, AppError> {
        let envelope: ApiEnvelope<LoginData> =
            post_json_with_credentials("/login", request).await?;
        envelope.into_data()
    }

    /// Creates an account; registration does not imply login.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterData, AppError> {
        let envelope: ApiEnvelope<RegisterData> =
            post_json_with_credentials("/register", request).await?;
        envelope.into_data()
    }

    /// Re-validates the cookie session. Failure is the normal steady state
    /// for anonymous visitors, not an error to surface.
    async fn refresh_session(&self) -> Result<(), AppError> {
        let envelope: ApiEnvelope<serde_json::Value> =
            post_empty_json_with_credentials("/refresh").await?;
        envelope.into_ack()
    }

    /// Clears the server-side session; callers treat the result as best-effort.
    async fn logout(&self) -> Result<(), AppError> {
        post_empty_with_credentials("/logout").await
    }

    /// Settles a two-factor challenge with a TOTP code.
    async fn verify_two_factor(
        &self,
        request: &TwoFactorVerifyRequest,
    ) -> Result<TwoFactorData, AppError> {
        let envelope: ApiEnvelope<TwoFactorData> =
            post_json_with_credentials("/2fa/verify", request).await?;
        envelope.into_data()
    }

    /// Settles a two-factor challenge with a recovery code.
    async fn verify_recovery_code(
        &self,
        request: &RecoveryVerifyRequest,
    ) -> Result<TwoFactorData, AppError> {
        let envelope: ApiEnvelope<TwoFactorData> =
            post_json_with_credentials("/2fa/verify/recovery", request).await?;
        envelope.into_data()
    }

    /// Fetches the authenticated user's profile.
    async fn fetch_current_user(&self) -> Result<UserProfile, AppError> {
        let envelope: ApiEnvelope<UserProfile> = get_json_with_credentials("/user/me").await?;
        envelope.into_data()
    }
}
