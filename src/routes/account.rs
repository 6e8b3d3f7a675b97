use crate::components::{AppShell, Button};
use crate::features::auth::use_auth;
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "My Account"
                </h1>
                {move || {
                    auth.user.get().map(|user| {
                        view! {
                            <div class="rounded-xl border border-gray-200 bg-white p-5 dark:border-gray-700 dark:bg-gray-800">
                                <dl class="space-y-3 text-sm">
                                    <div class="flex justify-between">
                                        <dt class="text-gray-500 dark:text-gray-400">"Username"</dt>
                                        <dd class="font-medium text-gray-900 dark:text-white">
                                            {user.username.clone()}
                                        </dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-gray-500 dark:text-gray-400">"Email"</dt>
                                        <dd class="font-medium text-gray-900 dark:text-white">
                                            {user.email.clone()}
                                        </dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-gray-500 dark:text-gray-400">"Email status"</dt>
                                        <dd>
                                            {if user.email_verified {
                                                view! {
                                                    <span class="rounded-full bg-emerald-50 px-2.5 py-0.5 text-xs font-medium text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                                                        "Verified"
                                                    </span>
                                                }
                                                .into_any()
                                            } else {
                                                view! {
                                                    <span class="rounded-full bg-amber-50 px-2.5 py-0.5 text-xs font-medium text-amber-700 dark:bg-amber-900/30 dark:text-amber-300">
                                                        "Unverified"
                                                    </span>
                                                }
                                                .into_any()
                                            }}
                                        </dd>
                                    </div>
                                </dl>
                            </div>
                        }
                    })
                }}
                <Button on:click=move |_| {
                    spawn_local(async move {
                        auth.logout().await;
                    });
                }>
                    "Sign Out"
                </Button>
            </div>
        </AppShell>
    }
}
