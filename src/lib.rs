//! # autostack-web
//!
//! Leptos + WASM frontend for AutoStack, a registry of curated tech stacks.
//! The application is a thin presentation layer over the AutoStack REST API:
//! data storage, authorization, password hashing, and TOTP validation all live
//! behind the API. What lives here is routing, form handling, and the
//! client-side session state machine that the rest of the UI consumes.
//!
//! Sessions are carried entirely by server-set cookies and re-validated on
//! page load via `POST /refresh`; the frontend keeps no durable session
//! storage of its own.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;
