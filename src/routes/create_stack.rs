use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{ProtectedOutcome, use_protected_actions};
use crate::features::stacks::client;
use crate::features::stacks::types::{CreateStackRequest, PackageInfo, StackType};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn CreateStackPage() -> impl IntoView {
    let protected = use_protected_actions();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (stack_type, set_stack_type) = signal(StackType::Frontend);
    let packages = RwSignal::new(Vec::<PackageInfo>::new());
    let (package_name, set_package_name) = signal(String::new());
    let (package_link, set_package_link) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (paused, set_paused) = signal(false);

    // The publish call may be rejected until the email is verified; the
    // protected wrapper parks it and replays it after verification.
    let create_action = Action::new_local(move |request: &CreateStackRequest| {
        let request = request.clone();
        async move {
            protected
                .execute(move || {
                    let request = request.clone();
                    async move { client::create_stack(&request).await }
                })
                .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(ProtectedOutcome::Completed(stack)) => {
                    navigate(&format!("/stacks/{}", stack.id), Default::default());
                }
                Ok(ProtectedOutcome::Paused) => set_paused.set(true),
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_type_change = move |event| {
        let selected = match event_target_value(&event).as_str() {
            "BACKEND" => StackType::Backend,
            "FULLSTACK" => StackType::Fullstack,
            _ => StackType::Frontend,
        };
        set_stack_type.set(selected);
    };

    let add_package = move |_| {
        let name_value = package_name.get_untracked().trim().to_string();
        let link_value = package_link.get_untracked().trim().to_string();
        if name_value.is_empty() || link_value.is_empty() {
            return;
        }
        packages.update(|list| {
            list.push(PackageInfo {
                package_name: name_value,
                package_link: link_value,
                is_verified: false,
            });
        });
        set_package_name.set(String::new());
        set_package_link.set(String::new());
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_paused.set(false);

        let name_value = name.get_untracked().trim().to_string();
        let description_value = description.get_untracked().trim().to_string();
        if name_value.is_empty() || description_value.is_empty() {
            set_error.set(Some("Name and description are required.".to_string()));
            return;
        }

        create_action.dispatch(CreateStackRequest {
            name: name_value,
            description: description_value,
            stack_type: stack_type.get_untracked(),
            packages: packages.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-lg mx-auto space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create Stack"
                </h1>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="name"
                    >
                        "Stack name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="description"
                    >
                        "Description"
                    </label>
                    <textarea
                        id="description"
                        rows="3"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        required
                        on:input=move |event| set_description.set(event_target_value(&event))
                    ></textarea>
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="type"
                    >
                        "Stack type"
                    </label>
                    <select
                        id="type"
                        class="rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                        on:change=on_type_change
                    >
                        <option value="FRONTEND">"Frontend"</option>
                        <option value="BACKEND">"Backend"</option>
                        <option value="FULLSTACK">"Fullstack"</option>
                    </select>
                </div>
                <div>
                    <span class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">
                        "Packages"
                    </span>
                    <div class="flex gap-2">
                        <input
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            placeholder="Package name"
                            prop:value=package_name
                            on:input=move |event| set_package_name.set(event_target_value(&event))
                        />
                        <input
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            placeholder="Package link"
                            prop:value=package_link
                            on:input=move |event| set_package_link.set(event_target_value(&event))
                        />
                        <button
                            type="button"
                            class="shrink-0 rounded-lg border border-indigo-200 px-3 text-sm font-medium text-indigo-700 hover:bg-indigo-50 dark:border-indigo-800 dark:text-indigo-300"
                            on:click=add_package
                        >
                            "Add"
                        </button>
                    </div>
                    <ul class="mt-3 space-y-1">
                        {move || {
                            packages
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, package)| {
                                    view! {
                                        <li class="flex items-center justify-between rounded-lg bg-gray-50 px-3 py-2 text-sm dark:bg-gray-700">
                                            <span class="text-gray-900 dark:text-white">
                                                {package.package_name.clone()}
                                            </span>
                                            <button
                                                type="button"
                                                class="text-xs font-medium text-red-600 hover:underline dark:text-red-400"
                                                on:click=move |_| {
                                                    packages.update(|list| {
                                                        list.remove(index);
                                                    });
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
                <Button button_type="submit" disabled=create_action.pending()>
                    "Publish Stack"
                </Button>
                {move || {
                    create_action
                        .pending()
                        .get()
                        .then_some(view! { <div><Spinner /></div> })
                }}
                {move || {
                    paused
                        .get()
                        .then_some(view! {
                            <Alert
                                kind=AlertKind::Info
                                message="Your stack will be published once your email is verified.".to_string()
                            />
                        })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
            </form>
        </AppShell>
    }
}
