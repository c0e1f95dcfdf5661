//! Shared application state type.

use crate::bootstrap::BridgeContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped [`BridgeContext`] holding the resolver and the
/// completion service.
pub type AppState = Arc<BridgeContext>;
