mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use nagato_front::prelude::*;

fn server(config: &Config) -> TestServer {
    TestServer::new(app_router(AppState::from_config(config))).unwrap()
}

#[tokio::test]
async fn test_navigate_root_shows_configured_link() {
    let config = Config::with_repository("https://github.com/owner/nagato");
    let server = server(&config);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(
        common::link_target(&response.text()),
        "https://github.com/owner/nagato"
    );
}

#[tokio::test]
async fn test_redirect_target_renders_same_page() {
    let config = Config::with_repository(common::TEST_REPOSITORY);
    let server = server(&config);

    let root = server.get("/").await;

    for path in ["/nonexistent/path", "/a", "/download", "/static/app.js"] {
        let redirected = server.get(path).await;
        redirected.assert_status(StatusCode::TEMPORARY_REDIRECT);

        let location = redirected.header("location");
        let followed = server.get(location.to_str().unwrap()).await;

        followed.assert_status_ok();
        assert_eq!(followed.text(), root.text(), "after redirect from {path}");
    }
}

#[tokio::test]
async fn test_legacy_routes_from_config() {
    let mut config = Config::with_repository(common::TEST_REPOSITORY);
    config.legacy_routes = true;
    let server = server(&config);

    let response = server.get("/download").await;

    response.assert_status_ok();
    assert_eq!(common::link_target(&response.text()), common::TEST_REPOSITORY);
}

#[tokio::test]
async fn test_legacy_redirect_lands_on_download_page() {
    let mut config = Config::with_repository(common::TEST_REPOSITORY);
    config.legacy_routes = true;
    let server = server(&config);

    let redirected = server.get("/old/link").await;
    redirected.assert_status(StatusCode::TEMPORARY_REDIRECT);

    let location = redirected.header("location");
    assert_eq!(location, "/download");

    let followed = server.get(location.to_str().unwrap()).await;
    followed.assert_status_ok();
    assert_eq!(common::link_target(&followed.text()), common::TEST_REPOSITORY);
}

#[tokio::test]
async fn test_page_title_from_config() {
    let mut config = Config::with_repository(common::TEST_REPOSITORY);
    config.page_title = "Nagato Downloads".to_string();
    let server = server(&config);

    let response = server.get("/").await;

    assert!(response.text().contains("<title>Nagato Downloads</title>"));
}

#[tokio::test]
async fn test_response_is_html() {
    let config = Config::with_repository(common::TEST_REPOSITORY);
    let server = server(&config);

    let response = server.get("/").await;

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}
