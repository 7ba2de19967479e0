//! # Nagato Front
//!
//! The download page of Nagato, served with Axum and rendered with Askama.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - The configured [`RepositoryLink`](domain::RepositoryLink)
//! - **Routing** ([`routing`]) - Ordered route table with a catch-all redirect
//! - **Web** ([`web`]) - Page components, templates, and the navigation handler
//! - **Shell** ([`routes`], [`server`]) - Router composition and server lifecycle
//!
//! ## Behavior
//!
//! - `GET /` renders the download page with a single link to the repository
//! - Every other path redirects to `/`
//! - With legacy routes enabled, the page moves to `/download` and every
//!   other path, root included, redirects there
//!
//! ## Quick Start
//!
//! ```bash
//! export REPOSITORY="https://github.com/owner/nagato"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod domain;
pub mod routing;
pub mod state;
pub mod web;

pub mod config;
pub mod logging;
pub mod middleware;
pub mod server;

pub mod routes;

pub use routing::RouteError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::RepositoryLink;
    pub use crate::routes::app_router;
    pub use crate::routing::{Resolution, RouteTable, RoutingVariant};
    pub use crate::state::AppState;
    pub use crate::web::pages::DownloadPage;
}
