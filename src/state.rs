//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::routing::RouteTable;
use crate::web::pages::DownloadPage;

/// Immutable state built once at startup.
///
/// Cloned per request by Axum; all fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub download_page: Arc<DownloadPage>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    pub fn new(download_page: DownloadPage, routes: RouteTable) -> Self {
        Self {
            download_page: Arc::new(download_page),
            routes: Arc::new(routes),
        }
    }

    /// Builds the page and route table described by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DownloadPage::new(config.repository().clone(), config.page_title.clone()),
            RouteTable::for_variant(config.routing_variant()),
        )
    }
}
