//! Route guards over the session state machine. Guards are UX only; real
//! access control must live on the API.

use crate::components::Spinner;
use crate::features::auth::session::{AuthPhase, use_auth};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

/// Redirect destination for a guarded view in the given phase, `None` when
/// the view may render or must keep waiting. A half-finished two-factor
/// challenge goes back to the challenge view, not to login, so a reload does
/// not strand the user mid-flow.
fn redirect_target(phase: AuthPhase) -> Option<&'static str> {
    match phase {
        AuthPhase::Unauthenticated => Some(paths::LOGIN),
        AuthPhase::AwaitingTwoFactor => Some(paths::TWO_FACTOR),
        AuthPhase::Initializing | AuthPhase::Authenticated => None,
    }
}

/// Renders children only for an authenticated session. While the first
/// bootstrap is still settling a placeholder is shown instead of redirecting,
/// which avoids a login flash for visitors with a valid cookie.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(target) = redirect_target(auth.phase.get()) {
            // Carry the requested location so the auth flow can return to it.
            let pathname = location.pathname.get_untracked();
            let search = location.search.get_untracked();
            let search = search.trim_start_matches('?');
            let from = if search.is_empty() {
                pathname
            } else {
                format!("{pathname}?{search}")
            };
            let encoded = String::from(js_sys::encode_uri_component(&from));
            navigate(
                &format!("{target}?from={encoded}"),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        {move || match auth.phase.get() {
            AuthPhase::Initializing => view! {
                <div class="flex justify-center py-16">
                    <Spinner />
                </div>
            }
            .into_any(),
            AuthPhase::Authenticated => children().into_any(),
            AuthPhase::Unauthenticated | AuthPhase::AwaitingTwoFactor => ().into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::redirect_target;
    use crate::features::auth::session::AuthPhase;
    use crate::routes::paths;

    #[test]
    fn initializing_renders_in_place() {
        assert_eq!(redirect_target(AuthPhase::Initializing), None);
    }

    #[test]
    fn authenticated_renders_in_place() {
        assert_eq!(redirect_target(AuthPhase::Authenticated), None);
    }

    #[test]
    fn unauthenticated_redirects_to_login() {
        assert_eq!(redirect_target(AuthPhase::Unauthenticated), Some(paths::LOGIN));
    }

    #[test]
    fn pending_two_factor_redirects_to_challenge() {
        assert_eq!(
            redirect_target(AuthPhase::AwaitingTwoFactor),
            Some(paths::TWO_FACTOR)
        );
    }
}
