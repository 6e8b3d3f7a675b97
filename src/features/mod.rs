//! Feature modules pairing API clients with their state and types.

pub mod auth;
pub mod stacks;
pub mod verification;
