//! Request handlers for the bridge API.

pub mod completions;
pub mod models;
