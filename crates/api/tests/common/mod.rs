#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use sriweb_api::content::ContentServices;
use sriweb_api::routes;
use sriweb_api::state::AppState;
use sriweb_db::ContentMirror;
use sriweb_docstore::memory::{MemoryStore, StaticConnector};
use sriweb_docstore::PrimaryProbe;

/// Full application router with no primary store configured, so every
/// read and write goes to the mirror in `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, PrimaryProbe::new(StaticConnector::unavailable()))
}

/// Full application router with `store` standing in for the primary.
pub fn build_test_app_with_primary(pool: PgPool, store: Arc<MemoryStore>) -> Router {
    build_app(pool, PrimaryProbe::new(StaticConnector::with_store(store)))
}

/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack production uses.
fn build_app(pool: PgPool, probe: PrimaryProbe) -> Router {
    let probe = Arc::new(probe);
    let mirror: Arc<dyn ContentMirror> = Arc::new(pool.clone());
    let content = Arc::new(ContentServices::new(Arc::clone(&probe), mirror));

    let state = AppState {
        pool,
        probe,
        content,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
