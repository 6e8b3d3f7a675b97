use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{LoginOutcome, use_auth};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[derive(Clone)]
struct LoginInput {
    username: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { auth.login(&input.username, &input.password).await }
    });

    // Only in-app paths may be returned to; anything else falls back home.
    let return_to = move || {
        query
            .with_untracked(|q| q.get("from"))
            .filter(|from| from.starts_with('/'))
            .unwrap_or_else(|| paths::HOME.to_string())
    };

    Effect::new(move |_| {
        if let Some(outcome) = login_action.value().get() {
            match outcome {
                LoginOutcome::Authenticated => navigate(&return_to(), Default::default()),
                LoginOutcome::TwoFactorRequired => {
                    let encoded = String::from(js_sys::encode_uri_component(&return_to()));
                    navigate(
                        &format!("{}?from={encoded}", paths::TWO_FACTOR),
                        Default::default(),
                    );
                }
                LoginOutcome::Failed(message) => set_error.set(Some(message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Username and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            username: username_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Sign in"
                </h1>
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
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
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
