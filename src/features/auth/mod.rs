//! Auth feature module covering login, registration, two-factor challenges,
//! and session hydration. It keeps authentication logic out of the UI and
//! must stay aligned with backend protocol expectations. This module touches
//! security boundaries and must avoid logging secrets or token material.
//!
//! Flow overview: login either establishes a cookie session directly or
//! yields a short-lived two-factor challenge token that `/2fa/verify`
//! exchanges for a session. Registration creates the account only; email
//! verification and an explicit login follow. Page loads re-validate the
//! cookie session once via `/refresh`.

pub mod client;
pub mod guards;
pub mod protected;
pub mod session;
pub mod types;

pub use guards::RequireAuth;
pub use protected::{ProtectedActions, ProtectedOutcome, use_protected_actions};
pub use session::{AuthPhase, AuthProvider, LoginOutcome, TwoFactorError, use_auth};
