use crate::components::{Alert, AlertKind, AppShell, Spinner, StackCard};
use crate::features::stacks::client;
use crate::features::stacks::types::{SortBy, SortingOrder, StackQuery, StackType};
use leptos::prelude::*;

const PAGE_SIZE: u32 = 12;

#[component]
pub fn BrowseStacksPage() -> impl IntoView {
    let (page, set_page) = signal(1u32);
    let (type_filter, set_type_filter) = signal::<Option<StackType>>(None);
    let (sort_by, set_sort_by) = signal(SortBy::Popularity);

    let stacks = LocalResource::new(move || {
        let query = StackQuery {
            sort_by: Some(sort_by.get()),
            sort_order: Some(SortingOrder::Descending),
            stack_type: type_filter.get(),
            page_number: Some(page.get()),
            page_size: Some(PAGE_SIZE),
        };
        async move { client::fetch_stacks(query).await }
    });

    let on_type_change = move |event| {
        let selected = match event_target_value(&event).as_str() {
            "FRONTEND" => Some(StackType::Frontend),
            "BACKEND" => Some(StackType::Backend),
            "FULLSTACK" => Some(StackType::Fullstack),
            _ => None,
        };
        set_type_filter.set(selected);
        set_page.set(1);
    };

    let on_sort_change = move |event| {
        let selected = match event_target_value(&event).as_str() {
            "rating" => SortBy::Rating,
            "posted" => SortBy::PostedDate,
            _ => SortBy::Popularity,
        };
        set_sort_by.set(selected);
        set_page.set(1);
    };

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="flex flex-wrap items-end justify-between gap-4">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Browse Stacks"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Curated package lists from the community."
                        </p>
                    </div>
                    <div class="flex gap-3">
                        <select
                            class="rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                            on:change=on_type_change
                        >
                            <option value="">"All types"</option>
                            <option value="FRONTEND">"Frontend"</option>
                            <option value="BACKEND">"Backend"</option>
                            <option value="FULLSTACK">"Fullstack"</option>
                        </select>
                        <select
                            class="rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                            on:change=on_sort_change
                        >
                            <option value="popularity">"Most popular"</option>
                            <option value="rating">"Best rated"</option>
                            <option value="posted">"Newest"</option>
                        </select>
                    </div>
                </div>

                <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                    {move || match stacks.get() {
                        Some(Ok(listing)) => {
                            let items = listing.items;
                            let is_empty = items.is_empty();
                            let has_previous_page = listing.has_previous_page;
                            let has_next_page = listing.has_next_page;
                            let page_number = listing.page_number;
                            let total_pages = listing.total_pages.max(1);
                            view! {
                                <div>
                                    <Show
                                        when=move || !is_empty
                                        fallback=move || view! {
                                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                                "No stacks match these filters yet."
                                            </p>
                                        }
                                    >
                                        <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
                                            {items
                                                .clone()
                                                .into_iter()
                                                .map(|stack| view! { <StackCard stack=stack /> })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                    <div class="mt-6 flex items-center justify-between text-sm">
                                        <button
                                            type="button"
                                            class="font-medium text-indigo-600 disabled:text-gray-400 dark:text-indigo-400"
                                            disabled=!has_previous_page
                                            on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                                        >
                                            "Previous"
                                        </button>
                                        <span class="text-gray-500 dark:text-gray-400">
                                            "Page " {page_number} " of " {total_pages}
                                        </span>
                                        <button
                                            type="button"
                                            class="font-medium text-indigo-600 disabled:text-gray-400 dark:text-indigo-400"
                                            disabled=!has_next_page
                                            on:click=move |_| set_page.update(|p| *p += 1)
                                        >
                                            "Next"
                                        </button>
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
            </div>
        </AppShell>
    }
}
