//! HTTP server — single /graphql route over the schema.
//!
//! POST executes GraphQL documents; GET serves the interactive playground
//! when enabled. The store is opened before serving and flushed on shutdown,
//! so the connection lifecycle is explicit rather than ambient global state.

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::graphql::{build_schema, CinegraphSchema};
use crate::store::Store;

/// Execute one GraphQL document.
async fn graphql_handler(
    State(schema): State<CinegraphSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Interactive schema explorer (development aid).
async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Build the router for the given schema.
pub fn router(schema: CinegraphSchema, playground_enabled: bool) -> Router {
    let graphql = if playground_enabled {
        post(graphql_handler).get(playground)
    } else {
        post(graphql_handler)
    };
    Router::new().route("/graphql", graphql).with_state(schema)
}

/// Serve the GraphQL API until ctrl-c, then flush the store.
pub async fn serve(config: &Config, store: Arc<Store>) -> Result<()> {
    let schema = build_schema(Arc::clone(&store));
    let app = router(schema, config.playground);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, playground = config.playground, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutting down");
    store.flush()?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}
