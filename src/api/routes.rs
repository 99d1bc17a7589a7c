use std::any::Any;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .nest("/api", api_routes())
            .fallback(handlers::not_found)
            .with_state(state),
    )
}

/// Routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/recommend", post(handlers::recommend))
        .route("/programs", get(handlers::get_programs))
        .route("/stats", get(handlers::get_stats))
}

/// Wraps a router in CORS, request ID, tracing and panic recovery
fn with_middleware(router: Router) -> Router {
    router.layer(
        // Request ID runs before tracing so the span can carry it
        ServiceBuilder::new()
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

/// Turns a handler panic into the generic 500 response
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn explode() -> &'static str {
        panic!("catalog index out of bounds")
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_generic_500() {
        let router = with_middleware(Router::new().route("/explode", get(explode)));
        let server = TestServer::new(router).unwrap();

        let response = server.get("/explode").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body, json!({ "error": "Internal server error" }));
        assert!(!response.header("x-request-id").is_empty());
    }

    #[test]
    fn test_panic_payload_becomes_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
