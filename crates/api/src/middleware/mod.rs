//! Request extractors that guard handlers.

pub mod auth;
