//! Axum adapter for the lmbridge completion bridge.
//!
//! Maps the three public operations (list models, get model, create
//! completion) onto the services in `lmbridge-core` and onto the external
//! wire schema. The adapter adds no semantics of its own: no content
//! negotiation, no streaming, no authentication. The listener is loopback
//! only.

#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; the integration tests in tests/
// are the consumers of these crates.
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tower as _;
#[cfg(test)]
use tracing_subscriber as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{BridgeContext, bind, bootstrap, serve};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
