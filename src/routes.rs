//! Top-level router: the application shell.
//!
//! # Route Structure
//!
//! There are no static Axum routes. A single `GET` fallback hands every path to
//! [`navigate_handler`], which consults the [`RouteTable`](crate::routing::RouteTable)
//! held in [`AppState`]:
//!
//! - `GET /`           - Download page
//! - `GET /*`          - `307` redirect to `/`
//!
//! With the legacy table the page is served at `GET /download` instead, and
//! every other path (root included) redirects there.
//!
//! Other methods get Axum's default `405 Method Not Allowed`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::navigate_handler;
use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - page and route table shared by all requests
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(get(navigate_handler))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(tracing::layer()))
}
