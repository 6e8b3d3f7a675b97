use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="py-16 text-center">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"404"</h1>
                <p class="mt-2 text-gray-600 dark:text-gray-300">
                    "This page does not exist."
                </p>
                <A
                    href={paths::HOME}
                    {..}
                    class="mt-6 inline-block text-sm font-medium text-indigo-600 underline underline-offset-4 dark:text-indigo-400"
                >
                    "Back home"
                </A>
            </div>
        </AppShell>
    }
}
