//! HTTP transport for the GraphQL API.
//!
//! Serves the schema at `/graphql` (POST for requests, GET for the GraphiQL
//! IDE) with CORS open to every origin.

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::graphql::{build_schema, ContactsSchema};
use crate::metrics::{Metrics, Timer};
use crate::service::ContactService;

/// Path the GraphQL endpoint is mounted at.
pub const GRAPHQL_PATH: &str = "/graphql";

/// HTTP server state.
#[derive(Clone)]
pub struct HttpState {
    schema: ContactsSchema,
    service: Arc<ContactService>,
    metrics: Arc<Metrics>,
}

/// Build the application router.
pub fn router(config: &Config, service: Arc<ContactService>) -> Router {
    let state = HttpState {
        schema: build_schema(service.clone()),
        metrics: service.metrics(),
        service,
    };

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler));

    if config.metrics {
        app = app.route("/metrics", get(metrics_handler));
    }

    app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server. Runs until the process is terminated.
pub async fn start_server(config: &Config, service: Arc<ContactService>) -> Result<()> {
    let app = router(config, service);

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("GraphQL endpoint ready at http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// GraphQL endpoint.
async fn graphql_handler(
    State(state): State<HttpState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let timer = Timer::start();
    state.metrics.inc_requests();

    let response = state.schema.execute(request).await;

    if response.is_ok() {
        state.metrics.inc_success();
    } else {
        state.metrics.inc_failed();
    }
    debug!(
        "GraphQL request finished in {}ms with {} error(s)",
        timer.elapsed_ms(),
        response.errors.len()
    );

    Json(response)
}

/// Prometheus metrics endpoint.
async fn metrics_handler(State(state): State<HttpState>) -> impl IntoResponse {
    let persons = state.service.count().await;
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.to_prometheus(persons),
    )
}
