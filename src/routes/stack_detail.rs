use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::stacks::client;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn StackDetailPage() -> impl IntoView {
    let params = use_params_map();

    let stack = LocalResource::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        async move { client::fetch_stack(&id).await }
    });

    view! {
        <AppShell>
            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match stack.get() {
                    Some(Ok(stack)) => {
                        let packages = stack.packages;
                        let package_rows = packages
                            .into_iter()
                            .map(|package| {
                                view! {
                                    <li class="flex items-center justify-between gap-3 rounded-lg border border-gray-200 bg-white px-4 py-3 dark:border-gray-700 dark:bg-gray-800">
                                        <a
                                            href=package.package_link.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-sm font-medium text-indigo-600 hover:underline dark:text-indigo-400"
                                        >
                                            {package.package_name.clone()}
                                        </a>
                                        {package.is_verified.then_some(view! {
                                            <span class="rounded-full bg-emerald-50 px-2.5 py-0.5 text-xs font-medium text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                                                "Verified"
                                            </span>
                                        })}
                                    </li>
                                }
                            })
                            .collect_view();

                        view! {
                            <div class="max-w-2xl mx-auto space-y-6">
                                <div class="space-y-2">
                                    <div class="flex items-center gap-3">
                                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                            {stack.name.clone()}
                                        </h1>
                                        <span class="rounded-full bg-indigo-50 px-2.5 py-0.5 text-xs font-medium text-indigo-700 dark:bg-indigo-900/30 dark:text-indigo-300">
                                            {stack.stack_type.label()}
                                        </span>
                                    </div>
                                    <p class="text-sm text-gray-600 dark:text-gray-300">
                                        {stack.description.clone()}
                                    </p>
                                    <p class="text-xs text-gray-500 dark:text-gray-400">
                                        {stack.downloads} " downloads"
                                        {stack
                                            .author
                                            .clone()
                                            .map(|author| view! { <span>" · by " {author}</span> })}
                                    </p>
                                </div>
                                <div>
                                    <h2 class="mb-3 text-sm font-semibold text-gray-900 dark:text-white">
                                        "Packages"
                                    </h2>
                                    <ul class="space-y-2">{package_rows}</ul>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    Some(Err(err)) => view! {
                        <Alert kind=AlertKind::Error message=err.user_message() />
                    }
                    .into_any(),
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </AppShell>
    }
}
