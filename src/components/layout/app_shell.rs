//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup and the mobile menu toggle so routes can focus
//! on content. Navigation is client-side only; the API enforces real access
//! control.

use crate::components::VerificationModal;
use crate::features::auth::use_auth;
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-indigo-700 md:p-0 dark:text-white md:dark:hover:text-indigo-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href={paths::HOME}
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="AutoStack" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "AutoStack"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            <li>
                                <A
                                    href={paths::BROWSE}
                                    {..}
                                    class=NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Browse Stacks"
                                </A>
                            </li>
                            <Show when=move || is_authenticated.get()>
                                <li>
                                    <A
                                        href={paths::MY_STACKS}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "My Stacks"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::CREATE_STACK}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Create Stack"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::ACCOUNT}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "My Account"
                                    </A>
                                </li>
                                <li>
                                    <button type="button" class=NAV_LINK on:click=move |_| {
                                        spawn_local(async move {
                                            auth.logout().await;
                                        });
                                        set_menu_open.set(false);
                                    }>
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                            <Show when=move || !is_authenticated.get()>
                                <li>
                                    <A
                                        href={paths::LOGIN}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Sign In"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::REGISTER}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Register"
                                    </A>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <VerificationModal />
        </div>
    }
}
