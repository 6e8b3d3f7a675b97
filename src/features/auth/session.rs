//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount using cookie-based API calls and exposes the auth
//! phase signal for guards and routes. Only non-sensitive metadata is stored
//! in memory; cookies remain `HttpOnly`, and the two-factor challenge token
//! never outlives the tab.

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use leptos::{prelude::*, task::spawn_local};

use crate::app_lib::AppError;
use crate::features::auth::client::{AuthApi, HttpAuthApi};
use crate::features::auth::protected::ProtectedActions;
use crate::features::auth::types::{
    LoginRequest, RecoveryVerifyRequest, RegisterRequest, TwoFactorVerifyRequest, UserProfile,
};

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// Where the client currently stands with the API. Exactly one value at a
/// time; every transition goes through the operations on [`AuthSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// First bootstrap has not settled yet; guards render a placeholder
    /// instead of redirecting.
    Initializing,
    Unauthenticated,
    /// Password accepted, second factor still owed. The challenge token is
    /// held in memory until verified or abandoned.
    AwaitingTwoFactor,
    Authenticated,
}

/// Result of a login attempt, returned to the caller rather than thrown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    TwoFactorRequired,
    Failed(String),
}

/// Result of a registration attempt. Registration never changes the auth
/// phase; the optional user id feeds the email-verification flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub user_id: Option<String>,
}

impl RegisterOutcome {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            user_id: None,
        }
    }
}

/// Failure modes of a two-factor verification attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TwoFactorError {
    /// No challenge is in progress; the call makes no network request.
    NoChallenge,
    /// The challenge stands and may be retried.
    Rejected(String),
}

type SharedBootstrap = Shared<LocalBoxFuture<'static, AuthPhase>>;

/// Session store shared through Leptos context. Cloning yields another
/// handle onto the same signals and the same in-flight bootstrap slot.
pub struct AuthSession<A: AuthApi + 'static> {
    pub phase: RwSignal<AuthPhase>,
    pub user: RwSignal<Option<UserProfile>>,
    /// Account id of a registration awaiting email verification.
    pub pending_user_id: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
    api: Rc<A>,
    challenge: Rc<RefCell<Option<String>>>,
    inflight: Rc<RefCell<Option<SharedBootstrap>>>,
}

impl<A: AuthApi + 'static> Clone for AuthSession<A> {
    fn clone(&self) -> Self {
        Self {
            phase: self.phase,
            user: self.user,
            pending_user_id: self.pending_user_id,
            is_authenticated: self.is_authenticated,
            api: Rc::clone(&self.api),
            challenge: Rc::clone(&self.challenge),
            inflight: Rc::clone(&self.inflight),
        }
    }
}

impl<A: AuthApi + 'static> AuthSession<A> {
    pub fn new(api: A) -> Self {
        let phase = RwSignal::new(AuthPhase::Initializing);
        let is_authenticated = Signal::derive(move || phase.get() == AuthPhase::Authenticated);
        Self {
            phase,
            user: RwSignal::new(None),
            pending_user_id: RwSignal::new(None),
            is_authenticated,
            api: Rc::new(api),
            challenge: Rc::new(RefCell::new(None)),
            inflight: Rc::new(RefCell::new(None)),
        }
    }

    /// Checks whether a valid cookie session exists. Callable any number of
    /// times concurrently: only the first caller performs network work, every
    /// caller observes the outcome of that single attempt.
    pub async fn bootstrap(&self) -> AuthPhase {
        let existing = self.inflight.borrow().clone();
        if let Some(attempt) = existing {
            return attempt.await;
        }

        let session = self.clone();
        let attempt: SharedBootstrap = async move { session.run_bootstrap().await }
            .boxed_local()
            .shared();
        *self.inflight.borrow_mut() = Some(attempt.clone());
        let phase = attempt.await;
        // No suspension point between the await settling and this clear, so
        // late arrivals either joined the attempt or start a fresh one.
        self.inflight.borrow_mut().take();
        phase
    }

    async fn run_bootstrap(&self) -> AuthPhase {
        match self.api.refresh_session().await {
            Ok(()) => match self.api.fetch_current_user().await {
                Ok(profile) => {
                    self.user.set(Some(profile));
                    self.phase.set(AuthPhase::Authenticated);
                }
                Err(err) => {
                    log::debug!("profile fetch after refresh failed: {err}");
                    self.reset_to_unauthenticated();
                }
            },
            Err(err) => {
                // Normal steady state for an anonymous visitor.
                log::debug!("session refresh declined: {err}");
                self.reset_to_unauthenticated();
            }
        }
        self.phase.get_untracked()
    }

    /// Exchanges credentials for a session. On a two-factor challenge the
    /// phase moves to [`AuthPhase::AwaitingTwoFactor`] and the challenge
    /// token is stored; on plain success the profile is fetched before the
    /// phase moves to [`AuthPhase::Authenticated`].
    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        if username.trim().is_empty() || password.is_empty() {
            return LoginOutcome::Failed("Username and password are required.".to_string());
        }

        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        match self.api.login(&request).await {
            Ok(data) if data.requires_two_factor => match data.two_factor_token {
                Some(token) => {
                    *self.challenge.borrow_mut() = Some(token);
                    self.user.set(None);
                    self.phase.set(AuthPhase::AwaitingTwoFactor);
                    LoginOutcome::TwoFactorRequired
                }
                None => {
                    // Challenge without a token cannot be settled.
                    self.reset_to_unauthenticated();
                    LoginOutcome::Failed(LOGIN_FALLBACK.to_string())
                }
            },
            Ok(_) => match self.api.fetch_current_user().await {
                Ok(profile) => {
                    self.user.set(Some(profile));
                    self.phase.set(AuthPhase::Authenticated);
                    LoginOutcome::Authenticated
                }
                Err(err) => {
                    self.reset_to_unauthenticated();
                    LoginOutcome::Failed(failure_message(&err, LOGIN_FALLBACK))
                }
            },
            Err(err) => {
                self.phase.set(AuthPhase::Unauthenticated);
                LoginOutcome::Failed(failure_message(&err, LOGIN_FALLBACK))
            }
        }
    }

    /// Creates an account. Does not change the auth phase: the user signs in
    /// explicitly after registering.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> RegisterOutcome {
        if email.trim().is_empty() || username.trim().is_empty() || password.is_empty() {
            return RegisterOutcome::failure("All fields are required.");
        }
        if password != confirm_password {
            return RegisterOutcome::failure("Passwords do not match.");
        }

        let request = RegisterRequest {
            email: email.trim().to_string(),
            username: username.trim().to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        match self.api.register(&request).await {
            Ok(data) => {
                self.pending_user_id.set(data.user_id.clone());
                RegisterOutcome {
                    success: true,
                    message: Some("Registration successful! Please log in.".to_string()),
                    user_id: data.user_id,
                }
            }
            Err(err) => RegisterOutcome::failure(failure_message(&err, REGISTER_FALLBACK)),
        }
    }

    /// Settles the pending two-factor challenge. Valid only while
    /// [`AuthPhase::AwaitingTwoFactor`]; on rejection the challenge stands so
    /// the user may retry.
    pub async fn verify_two_factor(
        &self,
        code: &str,
        use_recovery_code: bool,
    ) -> Result<(), TwoFactorError> {
        if self.phase.get_untracked() != AuthPhase::AwaitingTwoFactor {
            return Err(TwoFactorError::NoChallenge);
        }
        let token = match self.challenge.borrow().clone() {
            Some(token) => token,
            None => return Err(TwoFactorError::NoChallenge),
        };
        let code = code.trim();
        if code.is_empty() {
            return Err(TwoFactorError::Rejected(
                "Please enter a verification code.".to_string(),
            ));
        }

        let verified = if use_recovery_code {
            self.api
                .verify_recovery_code(&RecoveryVerifyRequest {
                    two_factor_token: token,
                    recovery_code: code.to_string(),
                })
                .await
        } else {
            self.api
                .verify_two_factor(&TwoFactorVerifyRequest {
                    two_factor_token: token,
                    code: code.to_string(),
                })
                .await
        };

        match verified {
            Ok(data) if data.access_token.is_some() => {
                match self.api.fetch_current_user().await {
                    Ok(profile) => {
                        self.challenge.borrow_mut().take();
                        self.user.set(Some(profile));
                        self.phase.set(AuthPhase::Authenticated);
                        Ok(())
                    }
                    Err(err) => {
                        // The challenge token is spent server-side; the only
                        // way forward is a fresh login.
                        log::debug!("profile fetch after verification failed: {err}");
                        self.reset_to_unauthenticated();
                        Err(TwoFactorError::Rejected(
                            "Verification succeeded but the session could not be loaded. Please sign in again."
                                .to_string(),
                        ))
                    }
                }
            }
            Ok(_) => Err(TwoFactorError::Rejected(
                "Invalid verification code.".to_string(),
            )),
            Err(err) => Err(TwoFactorError::Rejected(failure_message(
                &err,
                "Invalid verification code.",
            ))),
        }
    }

    /// Signs out. Local state is cleared first; the remote call is
    /// best-effort and its failure is swallowed.
    pub async fn logout(&self) {
        self.reset_to_unauthenticated();
        if let Err(err) = self.api.logout().await {
            log::debug!("remote logout failed: {err}");
        }
    }

    fn reset_to_unauthenticated(&self) {
        self.challenge.borrow_mut().take();
        self.user.set(None);
        self.pending_user_id.set(None);
        self.phase.set(AuthPhase::Unauthenticated);
    }
}

fn failure_message(err: &AppError, fallback: &str) -> String {
    let message = err.user_message();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Auth session context shared through Leptos. Copyable so event handlers
/// and view closures can capture it freely; the state machine itself is
/// pinned to the browser thread.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub phase: RwSignal<AuthPhase>,
    pub user: RwSignal<Option<UserProfile>>,
    pub pending_user_id: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
    session: StoredValue<AuthSession<HttpAuthApi>, LocalStorage>,
}

impl AuthContext {
    fn from_session(session: AuthSession<HttpAuthApi>) -> Self {
        Self {
            phase: session.phase,
            user: session.user,
            pending_user_id: session.pending_user_id,
            is_authenticated: session.is_authenticated,
            session: StoredValue::new_local(session),
        }
    }

    fn machine(&self) -> AuthSession<HttpAuthApi> {
        self.session.with_value(AuthSession::clone)
    }

    pub async fn bootstrap(&self) -> AuthPhase {
        self.machine().bootstrap().await
    }

    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        self.machine().login(username, password).await
    }

    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> RegisterOutcome {
        self.machine()
            .register(email, username, password, confirm_password)
            .await
    }

    pub async fn verify_two_factor(
        &self,
        code: &str,
        use_recovery_code: bool,
    ) -> Result<(), TwoFactorError> {
        self.machine().verify_two_factor(code, use_recovery_code).await
    }

    pub async fn logout(&self) {
        self.machine().logout().await;
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::from_session(AuthSession::new(HttpAuthApi));
    provide_context(auth);
    provide_context(ProtectedActions::new());

    spawn_local(async move {
        let _ = auth.bootstrap().await;
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::from_session(AuthSession::new(HttpAuthApi)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::{LoginData, RegisterData, TwoFactorData};
    use futures::executor::block_on;
    use futures::future::join;
    use std::cell::Cell;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    #[derive(Default)]
    struct Calls {
        login: Cell<usize>,
        register: Cell<usize>,
        refresh: Cell<usize>,
        logout: Cell<usize>,
        verify: Cell<usize>,
        recovery: Cell<usize>,
        profile: Cell<usize>,
    }

    struct MockApi {
        calls: Rc<Calls>,
        refresh_ok: bool,
        login_result: Result<LoginData, AppError>,
        register_result: Result<RegisterData, AppError>,
        verify_result: Result<TwoFactorData, AppError>,
        profile_result: Result<UserProfile, AppError>,
        logout_result: Result<(), AppError>,
    }

    fn mock(calls: &Rc<Calls>) -> MockApi {
        MockApi {
            calls: Rc::clone(calls),
            refresh_ok: false,
            login_result: Err(AppError::Http {
                status: 401,
                message: "Login failed".to_string(),
            }),
            register_result: Ok(RegisterData {
                user_id: Some("u7".to_string()),
            }),
            verify_result: Ok(TwoFactorData::default()),
            profile_result: Ok(sample_user()),
            logout_result: Ok(()),
        }
    }

    fn sample_user() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            username: "ana".to_string(),
            email: "a@x.com".to_string(),
            email_verified: true,
            avatar_url: None,
        }
    }

    fn challenge_login() -> Result<LoginData, AppError> {
        Ok(LoginData {
            requires_two_factor: true,
            two_factor_token: Some("tok1".to_string()),
            ..LoginData::default()
        })
    }

    fn accepted_verify() -> Result<TwoFactorData, AppError> {
        Ok(TwoFactorData {
            access_token: Some("at".to_string()),
            refresh_token: Some("rt".to_string()),
            ..TwoFactorData::default()
        })
    }

    /// Suspends once so concurrent callers interleave at the same points the
    /// browser event loop would.
    struct YieldOnce {
        yielded: bool,
    }

    fn yield_once() -> YieldOnce {
        YieldOnce { yielded: false }
    }

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.yielded {
                Poll::Ready(())
            } else {
                self.yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    impl AuthApi for MockApi {
        async fn login(&self, _request: &LoginRequest) -> Result<LoginData, AppError> {
            self.calls.login.set(self.calls.login.get() + 1);
            self.login_result.clone()
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<RegisterData, AppError> {
            self.calls.register.set(self.calls.register.get() + 1);
            self.register_result.clone()
        }

        async fn refresh_session(&self) -> Result<(), AppError> {
            yield_once().await;
            self.calls.refresh.set(self.calls.refresh.get() + 1);
            if self.refresh_ok {
                Ok(())
            } else {
                Err(AppError::Http {
                    status: 401,
                    message: "Session expired. Please log in again.".to_string(),
                })
            }
        }

        async fn logout(&self) -> Result<(), AppError> {
            self.calls.logout.set(self.calls.logout.get() + 1);
            self.logout_result.clone()
        }

        async fn verify_two_factor(
            &self,
            _request: &TwoFactorVerifyRequest,
        ) -> Result<TwoFactorData, AppError> {
            self.calls.verify.set(self.calls.verify.get() + 1);
            self.verify_result.clone()
        }

        async fn verify_recovery_code(
            &self,
            _request: &RecoveryVerifyRequest,
        ) -> Result<TwoFactorData, AppError> {
            self.calls.recovery.set(self.calls.recovery.get() + 1);
            self.verify_result.clone()
        }

        async fn fetch_current_user(&self) -> Result<UserProfile, AppError> {
            self.calls.profile.set(self.calls.profile.get() + 1);
            self.profile_result.clone()
        }
    }

    #[test]
    fn concurrent_bootstrap_shares_one_attempt() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            refresh_ok: true,
            ..mock(&calls)
        });

        let (first, second) = block_on(join(session.bootstrap(), session.bootstrap()));

        assert_eq!(first, AuthPhase::Authenticated);
        assert_eq!(second, AuthPhase::Authenticated);
        assert_eq!(calls.refresh.get(), 1);
        assert_eq!(calls.profile.get(), 1);
    }

    #[test]
    fn bootstrap_failure_skips_profile_fetch() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(mock(&calls));

        let phase = block_on(session.bootstrap());

        assert_eq!(phase, AuthPhase::Unauthenticated);
        assert_eq!(session.phase.get_untracked(), AuthPhase::Unauthenticated);
        assert_eq!(calls.refresh.get(), 1);
        assert_eq!(calls.profile.get(), 0);
    }

    #[test]
    fn bootstrap_success_hydrates_user() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            refresh_ok: true,
            ..mock(&calls)
        });

        let phase = block_on(session.bootstrap());

        assert_eq!(phase, AuthPhase::Authenticated);
        assert_eq!(session.user.get_untracked(), Some(sample_user()));
    }

    #[test]
    fn bootstrap_can_run_again_after_settling() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            refresh_ok: true,
            ..mock(&calls)
        });

        block_on(session.bootstrap());
        block_on(session.bootstrap());

        assert_eq!(calls.refresh.get(), 2);
    }

    #[test]
    fn failed_refresh_forces_authenticated_session_out() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(mock(&calls));
        session.phase.set(AuthPhase::Authenticated);
        session.user.set(Some(sample_user()));

        let phase = block_on(session.bootstrap());

        assert_eq!(phase, AuthPhase::Unauthenticated);
        assert_eq!(session.user.get_untracked(), None);
    }

    #[test]
    fn login_failure_returns_message_without_authenticating() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(mock(&calls));
        session.phase.set(AuthPhase::Unauthenticated);

        let outcome = block_on(session.login("ana", "bad-pw"));

        assert_eq!(outcome, LoginOutcome::Failed("Login failed".to_string()));
        assert_eq!(session.phase.get_untracked(), AuthPhase::Unauthenticated);
        assert_eq!(calls.profile.get(), 0);
    }

    #[test]
    fn login_with_challenge_stores_token_and_awaits_second_factor() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            login_result: challenge_login(),
            ..mock(&calls)
        });
        session.phase.set(AuthPhase::Unauthenticated);

        let outcome = block_on(session.login("ana", "pw"));

        assert_eq!(outcome, LoginOutcome::TwoFactorRequired);
        assert_eq!(session.phase.get_untracked(), AuthPhase::AwaitingTwoFactor);
        assert_eq!(session.challenge.borrow().as_deref(), Some("tok1"));
        assert_eq!(calls.profile.get(), 0);
    }

    #[test]
    fn login_plain_success_fetches_profile_then_authenticates() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            login_result: Ok(LoginData::default()),
            ..mock(&calls)
        });
        session.phase.set(AuthPhase::Unauthenticated);

        let outcome = block_on(session.login("ana", "pw"));

        assert_eq!(outcome, LoginOutcome::Authenticated);
        assert_eq!(session.phase.get_untracked(), AuthPhase::Authenticated);
        assert_eq!(session.user.get_untracked(), Some(sample_user()));
        assert_eq!(calls.login.get(), 1);
        assert_eq!(calls.profile.get(), 1);
    }

    #[test]
    fn login_rejects_empty_credentials_without_network_call() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(mock(&calls));
        session.phase.set(AuthPhase::Unauthenticated);

        let outcome = block_on(session.login("", "pw"));

        assert!(matches!(outcome, LoginOutcome::Failed(_)));
        assert_eq!(calls.login.get(), 0);
    }

    #[test]
    fn register_reports_user_id_without_changing_phase() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(mock(&calls));
        session.phase.set(AuthPhase::Unauthenticated);

        let outcome = block_on(session.register("a@x.com", "ana", "pw", "pw"));

        assert!(outcome.success);
        assert_eq!(outcome.user_id.as_deref(), Some("u7"));
        assert_eq!(session.phase.get_untracked(), AuthPhase::Unauthenticated);
        assert_eq!(
            session.pending_user_id.get_untracked().as_deref(),
            Some("u7")
        );
    }

    #[test]
    fn register_rejects_password_mismatch_without_network_call() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(mock(&calls));

        let outcome = block_on(session.register("a@x.com", "ana", "pw", "other"));

        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Passwords do not match."));
        assert_eq!(calls.register.get(), 0);
    }

    #[test]
    fn verify_without_challenge_fails_without_network_call() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(mock(&calls));
        session.phase.set(AuthPhase::Unauthenticated);

        let result = block_on(session.verify_two_factor("123456", false));

        assert_eq!(result, Err(TwoFactorError::NoChallenge));
        assert_eq!(calls.verify.get(), 0);
        assert_eq!(calls.recovery.get(), 0);
    }

    #[test]
    fn verify_success_authenticates_and_discards_challenge() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            login_result: challenge_login(),
            verify_result: accepted_verify(),
            ..mock(&calls)
        });
        session.phase.set(AuthPhase::Unauthenticated);
        block_on(session.login("ana", "pw"));

        let result = block_on(session.verify_two_factor("123456", false));

        assert_eq!(result, Ok(()));
        assert_eq!(session.phase.get_untracked(), AuthPhase::Authenticated);
        assert_eq!(session.user.get_untracked(), Some(sample_user()));
        assert!(session.challenge.borrow().is_none());
        assert_eq!(calls.verify.get(), 1);
        assert_eq!(calls.profile.get(), 1);
    }

    #[test]
    fn verify_rejection_keeps_challenge_for_retry() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            login_result: challenge_login(),
            ..mock(&calls)
        });
        session.phase.set(AuthPhase::Unauthenticated);
        block_on(session.login("ana", "pw"));

        let result = block_on(session.verify_two_factor("000000", false));

        assert!(matches!(result, Err(TwoFactorError::Rejected(_))));
        assert_eq!(session.phase.get_untracked(), AuthPhase::AwaitingTwoFactor);
        assert_eq!(session.challenge.borrow().as_deref(), Some("tok1"));
    }

    #[test]
    fn verify_with_recovery_code_uses_recovery_endpoint() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            login_result: challenge_login(),
            verify_result: accepted_verify(),
            ..mock(&calls)
        });
        session.phase.set(AuthPhase::Unauthenticated);
        block_on(session.login("ana", "pw"));

        let result = block_on(session.verify_two_factor("XXXX-XXXX-XX", true));

        assert_eq!(result, Ok(()));
        assert_eq!(calls.recovery.get(), 1);
        assert_eq!(calls.verify.get(), 0);
    }

    #[test]
    fn logout_clears_state_even_when_remote_call_fails() {
        let calls = Rc::new(Calls::default());
        let session = AuthSession::new(MockApi {
            logout_result: Err(AppError::Network("connection reset".to_string())),
            ..mock(&calls)
        });
        session.phase.set(AuthPhase::Authenticated);
        session.user.set(Some(sample_user()));

        block_on(session.logout());

        assert_eq!(session.phase.get_untracked(), AuthPhase::Unauthenticated);
        assert_eq!(session.user.get_untracked(), None);
        assert_eq!(calls.logout.get(), 1);
    }
}
