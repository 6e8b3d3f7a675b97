use crate::components::{AppShell, Spinner, StackCard};
use crate::features::stacks::client;
use crate::features::stacks::types::{SortBy, SortingOrder, StackQuery};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(move || {
        let query = StackQuery {
            sort_by: Some(SortBy::Popularity),
            sort_order: Some(SortingOrder::Descending),
            page_number: Some(1),
            page_size: Some(6),
            ..StackQuery::default()
        };
        async move { client::fetch_stacks(query).await }
    });

    view! {
        <AppShell>
            <div class="space-y-10">
                <div class="py-12 text-center">
                    <h1 class="text-4xl font-bold text-gray-900 dark:text-white">
                        "Ship with a stack that works"
                    </h1>
                    <p class="mx-auto mt-4 max-w-xl text-gray-600 dark:text-gray-300">
                        "Browse curated package lists from the community, or publish your own and skip the setup guesswork."
                    </p>
                    <div class="mt-6 flex justify-center gap-4">
                        <A
                            href={paths::BROWSE}
                            {..}
                            class="rounded-lg bg-indigo-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-indigo-800"
                        >
                            "Browse Stacks"
                        </A>
                        <A
                            href={paths::REGISTER}
                            {..}
                            class="rounded-lg border border-gray-300 px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100 dark:border-gray-600 dark:text-white dark:hover:bg-gray-700"
                        >
                            "Get Started"
                        </A>
                    </div>
                </div>
                <div>
                    <h2 class="mb-4 text-xl font-semibold text-gray-900 dark:text-white">
                        "Popular stacks"
                    </h2>
                    <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                        {move || match featured.get() {
                            Some(Ok(listing)) => view! {
                                <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
                                    {listing
                                        .items
                                        .clone()
                                        .into_iter()
                                        .map(|stack| view! { <StackCard stack=stack /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any(),
                            // The catalog being unreachable should not break
                            // the landing page.
                            Some(Err(_)) => ().into_any(),
                            None => view! { <Spinner /> }.into_any(),
                        }}
                    </Suspense>
                </div>
            </div>
        </AppShell>
    }
}
