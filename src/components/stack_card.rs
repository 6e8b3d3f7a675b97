//! Card summarizing one stack listing in catalog grids.

use crate::features::stacks::types::StackSummary;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn StackCard(stack: StackSummary) -> impl IntoView {
    let href = format!("/stacks/{}", stack.id);
    let package_count = stack.packages.len();

    view! {
        <A
            href={href}
            {..}
            class="block rounded-xl border border-gray-200 bg-white p-5 shadow-sm transition-all hover:border-indigo-500 dark:border-gray-700 dark:bg-gray-800"
        >
            <div class="flex items-center justify-between gap-2">
                <h3 class="font-semibold text-gray-900 dark:text-white">{stack.name.clone()}</h3>
                <span class="rounded-full bg-indigo-50 px-2.5 py-0.5 text-xs font-medium text-indigo-700 dark:bg-indigo-900/30 dark:text-indigo-300">
                    {stack.stack_type.label()}
                </span>
            </div>
            <p class="mt-2 text-sm text-gray-600 line-clamp-2 dark:text-gray-300">
                {stack.description.clone()}
            </p>
            <div class="mt-4 flex items-center gap-4 text-xs text-gray-500 dark:text-gray-400">
                <span>{stack.downloads} " downloads"</span>
                <span>{package_count} " packages"</span>
                {stack
                    .author
                    .clone()
                    .map(|author| view! { <span>"by " {author}</span> })}
            </div>
        </A>
    }
}
