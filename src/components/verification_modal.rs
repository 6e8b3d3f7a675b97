//! Modal prompting for the emailed verification code when a write was
//! rejected pending email verification. Completing it replays the parked
//! action once; dismissing discards it.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::{use_auth, use_protected_actions};
use crate::features::verification::client;
use leptos::prelude::*;

#[component]
pub fn VerificationModal() -> impl IntoView {
    let auth = use_auth();
    let protected = use_protected_actions();

    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (resent, set_resent) = signal(false);

    // A fresh registration has no session yet, so fall back to the pending id.
    let user_id = Signal::derive(move || {
        auth.user
            .get()
            .map(|user| user.id)
            .or_else(|| auth.pending_user_id.get())
            .unwrap_or_default()
    });

    let verify_action = Action::new_local(move |code: &String| {
        let code = code.clone();
        async move {
            match client::verify_email(&user_id.get_untracked(), &code).await {
                Ok(()) => {
                    protected.complete_verification().await;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    set_code.set(String::new());
                    set_error.set(None);
                    set_resent.set(false);
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let resend_action = Action::new_local(move |_: &()| async move {
        client::resend_verification(&user_id.get_untracked()).await
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => {
                    set_resent.set(true);
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_cancel = move |_| {
        protected.cancel_verification();
        set_code.set(String::new());
        set_error.set(None);
        set_resent.set(false);
    };

    let verify_disabled =
        Signal::derive(move || code.get().trim().is_empty() || verify_action.pending().get());

    view! {
        <Show when=move || protected.verification_required.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-slate-900/50 px-4">
                <div class="w-full max-w-md rounded-xl border border-gray-200 bg-white p-6 shadow-xl dark:border-gray-700 dark:bg-gray-800">
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                        "Verify your email"
                    </h2>
                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                        "This action needs a verified email address. Enter the code we sent you and we will pick up where you left off."
                    </p>
                    <div class="mt-4">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="verification_code"
                        >
                            "Verification code"
                        </label>
                        <input
                            id="verification_code"
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                            autocomplete="off"
                            placeholder="000000"
                            prop:value=code
                            on:input=move |event| set_code.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mt-5 flex flex-wrap items-center gap-3">
                        <Button
                            disabled=verify_disabled
                            on:click=move |_| { verify_action.dispatch(code.get()); }
                        >
                            "Verify"
                        </Button>
                        <button
                            type="button"
                            class="text-sm font-medium text-indigo-600 underline underline-offset-4 hover:text-indigo-800 dark:text-indigo-400"
                            disabled=move || resend_action.pending().get()
                            on:click=move |_| { resend_action.dispatch(()); }
                        >
                            "Resend email"
                        </button>
                        <button
                            type="button"
                            class="text-sm font-medium text-gray-500 hover:text-gray-700 dark:text-gray-400"
                            on:click=on_cancel
                        >
                            "Cancel"
                        </button>
                    </div>
                    {move || {
                        verify_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        resent
                            .get()
                            .then_some(view! {
                                <div class="mt-4">
                                    <Alert
                                        kind=AlertKind::Success
                                        message="A new code is on the way.".to_string()
                                    />
                                </div>
                            })
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
                </div>
            </div>
        </Show>
    }
}
