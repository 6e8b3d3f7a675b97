use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::use_auth;
use crate::features::verification::client;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    MissingCode,
    Pending,
    Success,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
enum ResendStatus {
    Idle,
    Pending,
    Success,
    Error(String),
}

/// Landing page for emailed verification links of the form
/// `/verify-email?userId=...&code=...`. Verifies on arrival and offers a
/// resend when the link is stale.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let (status, set_status) = signal(VerifyStatus::Idle);
    let (resend_status, set_resend_status) = signal(ResendStatus::Idle);

    let user_id = Signal::derive(move || {
        query
            .with(|q| q.get("userId"))
            .or_else(|| auth.pending_user_id.get())
            .unwrap_or_default()
    });

    let verify_action = Action::new_local(move |code: &String| {
        let code = code.clone();
        async move { client::verify_email(&user_id.get_untracked(), &code).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => set_status.set(VerifyStatus::Success),
                Err(err) => set_status.set(VerifyStatus::Error(err.user_message())),
            }
        }
    });

    Effect::new(move |_| {
        if status.get() != VerifyStatus::Idle {
            return;
        }

        let code = query.with(|q| q.get("code")).unwrap_or_default();
        if code.trim().is_empty() || user_id.get().trim().is_empty() {
            set_status.set(VerifyStatus::MissingCode);
        } else {
            set_status.set(VerifyStatus::Pending);
            verify_action.dispatch(code);
        }
    });

    let resend_action = Action::new_local(move |_: &()| async move {
        client::resend_verification(&user_id.get_untracked()).await
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => set_resend_status.set(ResendStatus::Success),
                Err(err) => set_resend_status.set(ResendStatus::Error(err.user_message())),
            }
        }
    });

    let on_resend_click = move |_| {
        if user_id.get_untracked().trim().is_empty() {
            set_resend_status.set(ResendStatus::Error(
                "We do not know which account to resend for. Please register or sign in first."
                    .to_string(),
            ));
            return;
        }
        set_resend_status.set(ResendStatus::Pending);
        resend_action.dispatch(());
    };

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Verify your email"
                </h1>
                {move || match status.get() {
                    VerifyStatus::Idle | VerifyStatus::Pending => view! {
                        <div class="mt-4">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Success => view! {
                        <div class="mt-4 space-y-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Email verified. You can sign in now.".to_string()
                            />
                            <A
                                href={paths::LOGIN}
                                {..}
                                class="inline-block text-sm font-medium text-indigo-600 underline underline-offset-4 dark:text-indigo-400"
                            >
                                "Go to sign in"
                            </A>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::MissingCode => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Error
                                message="Missing verification code. Check your email link.".to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }
                    .into_any(),
                }}
                <div class="mt-8 rounded-lg border border-gray-200 bg-white p-5 dark:border-gray-700 dark:bg-gray-800">
                    <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                        "Need a new code?"
                    </h2>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-300">
                        "We can send a fresh verification email."
                    </p>
                    <div class="mt-4">
                        <Button
                            button_type="button"
                            disabled=resend_action.pending()
                            on:click=on_resend_click
                        >
                            "Resend verification"
                        </Button>
                    </div>
                    {move || {
                        resend_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || match resend_status.get() {
                        ResendStatus::Idle | ResendStatus::Pending => None,
                        ResendStatus::Success => Some(view! {
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="If that account exists, a new email is on the way.".to_string()
                                />
                            </div>
                        }),
                        ResendStatus::Error(message) => Some(view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }),
                    }}
                </div>
            </div>
        </AppShell>
    }
}
