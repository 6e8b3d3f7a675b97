//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! 1. **Bootstrap:** On mount the session provider POSTs `/refresh`; when the
//!    cookie session is still valid it GETs `/user/me` and hydrates the auth
//!    state. A failed refresh is the normal anonymous steady state.
//! 2. **Login:** `POST /login` either establishes a session directly or
//!    returns a short-lived two-factor challenge token; the challenge is
//!    settled via `POST /2fa/verify` (or `/2fa/verify/recovery`).
//! 3. **Registration & Email Verification:** `POST /register` creates the
//!    account; `/email-verification/verify` and `/email-verification/resend`
//!    settle the emailed code. Write endpoints reject with 403 until the email
//!    is verified, which the protected-action flow turns into a prompt.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging sensitive data.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

pub use api::{
    ApiEnvelope, delete_with_credentials, get_json, get_json_with_credentials,
    post_empty_json_with_credentials, post_empty_with_credentials, post_json_with_credentials,
};
pub use errors::AppError;
