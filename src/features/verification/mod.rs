//! Email verification feature backing the protected-action prompt.

pub mod client;
