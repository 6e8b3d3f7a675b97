//! Two-factor challenge route.
//!
//! Settles the challenge issued by login:
//! 1. Ask for the 6-digit TOTP code.
//! 2. Option to use a recovery code instead.
//! 3. Verify and return to the originally requested page.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{AuthPhase, TwoFactorError, use_auth};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[derive(Clone)]
struct VerifyInput {
    code: String,
    use_recovery_code: bool,
}

#[component]
pub fn TwoFactorPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();

    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (use_recovery, set_use_recovery) = signal(false);

    // Landing here without a pending challenge (reload, stale link) goes
    // back to login. A successful verification moves the phase to
    // authenticated, which must not re-trigger this.
    let navigate_for_guard = navigate.clone();
    Effect::new(move |_| {
        if auth.phase.get() == AuthPhase::Unauthenticated {
            navigate_for_guard(paths::LOGIN, Default::default());
        }
    });

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        async move {
            auth.verify_two_factor(&input.code, input.use_recovery_code)
                .await
        }
    });

    let return_to = move || {
        query
            .with_untracked(|q| q.get("from"))
            .filter(|from| from.starts_with('/'))
            .unwrap_or_else(|| paths::HOME.to_string())
    };

    let navigate_for_verify = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => navigate_for_verify(&return_to(), Default::default()),
                Err(TwoFactorError::NoChallenge) => {
                    navigate_for_verify(paths::LOGIN, Default::default());
                }
                Err(TwoFactorError::Rejected(message)) => {
                    set_error.set(Some(message));
                    set_code.set(String::new());
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let code_value = code.get_untracked().trim().to_string();
        if code_value.is_empty() {
            set_error.set(Some("Please enter a verification code.".to_string()));
            return;
        }

        verify_action.dispatch(VerifyInput {
            code: code_value,
            use_recovery_code: use_recovery.get_untracked(),
        });
    };

    let toggle_recovery = move |_| {
        set_use_recovery.update(|value| *value = !*value);
        set_code.set(String::new());
        set_error.set(None);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Two-Factor Authentication"
                </h1>
                <p class="mb-6 text-sm text-gray-600 dark:text-gray-300">
                    {move || if use_recovery.get() {
                        "Enter one of your recovery codes."
                    } else {
                        "Enter the 6-digit code from your authenticator app."
                    }}
                </p>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="code"
                    >
                        {move || if use_recovery.get() { "Recovery code" } else { "Verification code" }}
                    </label>
                    <input
                        id="code"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        autocomplete="off"
                        placeholder=move || if use_recovery.get() { "XXXX-XXXX-XX" } else { "000000" }
                        maxlength=move || if use_recovery.get() { "12" } else { "6" }
                        prop:value=code
                        required
                        on:input=move |event| set_code.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=verify_action.pending()>
                    {move || if verify_action.pending().get() { "Verifying..." } else { "Verify" }}
                </Button>
                <div class="mt-4">
                    <button
                        type="button"
                        class="text-sm font-medium text-indigo-600 underline underline-offset-4 hover:text-indigo-800 dark:text-indigo-400"
                        disabled=move || verify_action.pending().get()
                        on:click=toggle_recovery
                    >
                        {move || if use_recovery.get() {
                            "Use authenticator app instead"
                        } else {
                            "Can't access your app? Use a recovery code"
                        }}
                    </button>
                </div>
                {move || {
                    verify_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
