use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::use_auth;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone)]
struct RegisterInput {
    email: String,
    username: String,
    password: String,
    confirm_password: String,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (registered, set_registered) = signal(false);

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        async move {
            auth.register(
                &input.email,
                &input.username,
                &input.password,
                &input.confirm_password,
            )
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(outcome) = register_action.value().get() {
            if outcome.success {
                set_registered.set(true);
                set_error.set(None);
            } else {
                set_error.set(outcome.message);
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if email_value.is_empty() || username_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("All fields are required.".to_string()));
            return;
        }
        if password_value != confirm_value {
            set_error.set(Some("Passwords do not match.".to_string()));
            return;
        }

        register_action.dispatch(RegisterInput {
            email: email_value,
            username: username_value,
            password: password_value,
            confirm_password: confirm_value,
        });
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="mb-2 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Register"
                </h1>
                <p class="mb-6 text-sm text-gray-600 dark:text-gray-300">
                    "Create your AutoStack account"
                </p>
                <Show
                    when=move || registered.get()
                    fallback=move || view! {
                        <form on:submit=on_submit>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                    for="email"
                                >
                                    "Your email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                                    autocomplete="email"
                                    placeholder="name@inbox.im"
                                    required
                                    on:input=move |event| set_email.set(event_target_value(&event))
                                />
                            </div>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                    for="username"
                                >
                                    "Your username"
                                </label>
                                <input
                                    id="username"
                                    type="text"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                                    autocomplete="username"
                                    required
                                    on:input=move |event| set_username.set(event_target_value(&event))
                                />
                            </div>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                    for="password"
                                >
                                    "Your password"
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                                    autocomplete="new-password"
                                    required
                                    on:input=move |event| set_password.set(event_target_value(&event))
                                />
                            </div>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                    for="confirm_password"
                                >
                                    "Confirm password"
                                </label>
                                <input
                                    id="confirm_password"
                                    type="password"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                                    autocomplete="new-password"
                                    required
                                    on:input=move |event| set_confirm_password.set(event_target_value(&event))
                                />
                            </div>
                            <Button button_type="submit" disabled=register_action.pending()>
                                "Create Account"
                            </Button>
                            {move || {
                                register_action
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
                    }
                >
                    <div class="space-y-4">
                        <Alert
                            kind=AlertKind::Success
                            message="Registration successful! Check your inbox for a verification code, then sign in.".to_string()
                        />
                        <A
                            href={paths::LOGIN}
                            {..}
                            class="inline-block text-sm font-medium text-indigo-600 underline underline-offset-4 hover:text-indigo-800 dark:text-indigo-400"
                        >
                            "Go to sign in"
                        </A>
                    </div>
                </Show>
            </div>
        </AppShell>
    }
}
