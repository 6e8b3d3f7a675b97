use crate::components::{Alert, AlertKind, AppShell, Spinner, StackCard};
use crate::features::stacks::client;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn MyStacksPage() -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let stacks = LocalResource::new(move || async move { client::fetch_my_stacks().await });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_stack(&id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    stacks.refetch();
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "My Stacks"
                    </h1>
                    <A
                        href={paths::CREATE_STACK}
                        {..}
                        class="text-sm font-medium text-indigo-600 underline underline-offset-4 hover:text-indigo-800 dark:text-indigo-400"
                    >
                        "Create a stack"
                    </A>
                </div>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                    {move || match stacks.get() {
                        Some(Ok(items)) => {
                            let is_empty = items.is_empty();
                            view! {
                                <Show
                                    when=move || !is_empty
                                    fallback=move || view! {
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            "You have not published any stacks yet."
                                        </p>
                                    }
                                >
                                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
                                        {items
                                            .clone()
                                            .into_iter()
                                            .map(|stack| {
                                                let id = stack.id.clone();
                                                view! {
                                                    <div class="space-y-2">
                                                        <StackCard stack=stack />
                                                        <button
                                                            type="button"
                                                            class="text-xs font-medium text-red-600 hover:underline dark:text-red-400"
                                                            disabled=move || delete_action.pending().get()
                                                            on:click=move |_| { delete_action.dispatch(id.clone()); }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
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
