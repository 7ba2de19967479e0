#![allow(dead_code)]

use nagato_front::domain::RepositoryLink;
use nagato_front::routing::{RouteTable, RoutingVariant};
use nagato_front::state::AppState;
use nagato_front::web::pages::{DEFAULT_TITLE, DownloadPage};

pub const TEST_REPOSITORY: &str = "https://example.com/repo";

pub fn create_test_state(repository: &str, variant: RoutingVariant) -> AppState {
    AppState::new(
        DownloadPage::new(RepositoryLink::from(repository), DEFAULT_TITLE),
        RouteTable::for_variant(variant),
    )
}

pub fn canonical_state() -> AppState {
    create_test_state(TEST_REPOSITORY, RoutingVariant::Canonical)
}

pub fn legacy_state() -> AppState {
    create_test_state(TEST_REPOSITORY, RoutingVariant::Legacy)
}

/// Extracts the `href` of the single `<a>` element in a rendered page.
pub fn link_target(html: &str) -> &str {
    let start = html.find("href=\"").expect("page has no link") + "href=\"".len();
    let end = html[start..].find('"').expect("unterminated href") + start;
    &html[start..end]
}
