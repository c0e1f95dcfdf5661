//! Bridge bootstrap - the composition root.
//!
//! This module is the ONLY place where the host's collaborators (registry,
//! engine) are wired into the bridge services. Handlers reach everything
//! through `AppState`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use lmbridge_core::{
    BridgeSettings, CompletionService, EngineContext, ModelCatalog, ModelResolver, TextEngine,
    TranscriptEvents, transcript_channel,
};

/// Application context for the bridge adapter.
pub struct BridgeContext {
    /// Public-id resolution over the installed-model registry.
    pub resolver: ModelResolver,
    /// The generation orchestrator.
    pub completions: CompletionService,
}

/// Wire registry + engine + transcript into a ready context.
///
/// Returns the context plus the UI-side transcript receiver. The host
/// application must drain and acknowledge the receiver; otherwise every
/// completion fails with 503 once the bounded wait expires.
pub fn bootstrap(
    settings: &BridgeSettings,
    catalog: Arc<dyn ModelCatalog>,
    engine: Box<dyn TextEngine>,
) -> (BridgeContext, TranscriptEvents) {
    let (notifier, events) = transcript_channel(settings.transcript_ack_timeout());

    let resolver = ModelResolver::new(catalog);
    let context = Arc::new(Mutex::new(EngineContext::new(
        engine,
        settings.sampling.clone(),
    )));
    let completions = CompletionService::new(resolver.clone(), context, notifier);

    (
        BridgeContext {
            resolver,
            completions,
        },
        events,
    )
}

/// Bind the bridge listener.
///
/// Loopback only: the bridge carries no authentication, so it must never
/// bind a routable interface.
pub async fn bind(port: u16) -> Result<tokio::net::TcpListener> {
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);
    Ok(tokio::net::TcpListener::bind(addr).await?)
}

/// Serve the bridge API on `127.0.0.1:<port>`.
pub async fn serve(context: BridgeContext, port: u16) -> Result<()> {
    let listener = bind(port).await?;
    tracing::info!(addr = %listener.local_addr()?, "completion bridge listening");

    axum::serve(listener, crate::routes::create_router(context)).await?;
    Ok(())
}
