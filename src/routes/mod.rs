//! Route modules and the client-side route table.

mod account;
mod browse;
mod create_stack;
mod home;
mod login;
mod my_stacks;
mod not_found;
mod register;
mod stack_detail;
mod two_factor;
mod verify_email;

pub use account::AccountPage;
pub use browse::BrowseStacksPage;
pub use create_stack::CreateStackPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_stacks::MyStacksPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use stack_detail::StackDetailPage;
pub use two_factor::TwoFactorPage;
pub use verify_email::VerifyEmailPage;

use crate::features::auth::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by links, guards, and redirects.
pub mod paths {
    pub const HOME: &str = "/";
    pub const BROWSE: &str = "/stacks";
    pub const CREATE_STACK: &str = "/stacks/new";
    pub const MY_STACKS: &str = "/my-stacks";
    pub const ACCOUNT: &str = "/account";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const TWO_FACTOR: &str = "/two-factor";
    pub const VERIFY_EMAIL: &str = "/verify-email";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/stacks") view=BrowseStacksPage />
            <Route
                path=path!("/stacks/new")
                view=|| view! { <RequireAuth><CreateStackPage /></RequireAuth> }
            />
            <Route path=path!("/stacks/:id") view=StackDetailPage />
            <Route
                path=path!("/my-stacks")
                view=|| view! { <RequireAuth><MyStacksPage /></RequireAuth> }
            />
            <Route
                path=path!("/account")
                view=|| view! { <RequireAuth><AccountPage /></RequireAuth> }
            />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/two-factor") view=TwoFactorPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
