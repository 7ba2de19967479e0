//! Navigation handler: resolves every request path through the route table.

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::routing::{Resolution, RouteTarget};
use crate::state::AppState;

/// Renders the page for a recognized path or redirects to the canonical one.
///
/// # Endpoint
///
/// `GET /*` (installed as the router fallback, so it sees every path)
///
/// # Response Codes
///
/// - **200 OK**: path matches a page route; body is the rendered HTML
/// - **307 Temporary Redirect**: any other path; `Location` is the table's
///   redirect target (`/`)
///
/// Query strings are ignored and never forwarded on redirect.
pub async fn navigate_handler(State(state): State<AppState>, uri: Uri) -> Response {
    match state.routes.resolve(uri.path()) {
        Resolution::Page(route) => match route.target() {
            RouteTarget::Download => state
                .download_page
                .template(route.title())
                .into_response(),
        },
        Resolution::Redirect { location } => {
            debug!(from = uri.path(), to = %location, "Redirecting unmatched path");
            Redirect::temporary(&location).into_response()
        }
    }
}
