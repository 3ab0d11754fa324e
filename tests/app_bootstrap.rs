mod common;

use common::{window, MockFetcher};
use meowbox_docs::app::{initialize_with, Bootstrap};
use meowbox_docs::core::config::Config;
use meowbox_docs::loader::Resource;
use meowbox_docs::pages::not_found;
use meowbox_docs::{initialize_app, preview, AppError, Outcome};

#[tokio::test]
async fn layout_loads_before_dependents() {
    let (window, fetcher) = window(MockFetcher::new().with_bootstrap());

    let outcome = initialize_app(&window).await.unwrap();
    assert_eq!(outcome, Outcome::Redirected("#/en/index.html".into()));

    let requests = fetcher.requests();
    assert_eq!(requests.len(), 6);
    assert_eq!(requests[0], "/js/layout.js");
    assert!(window.document().get_element_by_id("page").is_some());
    assert_eq!(
        window.document().stylesheet_hrefs(),
        vec![
            "/css/layout.css",
            "/css/index.css",
            "/font-awesome/css/all.min.css"
        ]
    );
}

#[tokio::test]
async fn resource_failure_aborts_before_mount() {
    let (window, _) = window(MockFetcher::new().with_bootstrap().with_status("/css/index.css", 404));

    let result = initialize_app(&window).await;
    assert_eq!(result, Err(AppError::ResourceLoad("/css/index.css".into())));
    assert!(window.document().get_element_by_id("page").is_none());
    assert_eq!(window.hash(), "");
}

#[tokio::test]
async fn layout_failure_skips_dependents() {
    let (window, fetcher) = window(MockFetcher::new());
    let bootstrap = Bootstrap {
        layout: vec![Resource::script("/js/layout.js")],
        dependent: vec![Resource::stylesheet("/css/layout.css")],
    };

    assert!(initialize_with(&window, &bootstrap).await.is_err());
    assert_eq!(fetcher.requests(), vec!["/js/layout.js"]);
}

#[tokio::test]
async fn not_found_go_home_reloads_root() {
    let (window, fetcher) = window(MockFetcher::new().with_bootstrap());
    initialize_app(&window).await.unwrap();
    window.pump_events().await;
    window.set_hash("#/missing");
    assert_eq!(window.pump_events().await, vec![Outcome::NotFound]);
    assert!(not_found::change_language(&mut window.document(), "zh-TW"));

    not_found::go_home(&window).await.unwrap();
    assert_eq!(window.page_loads(), vec!["/", "/"]);
    assert_eq!(window.hash(), "#/en/index.html");
    assert!(window.document().get_elements_by_class("title-404").is_empty());
    // the reload discarded the registry, so the shell is requested again
    assert_eq!(fetcher.request_count("/js/layout.js"), 2);
}

#[tokio::test]
async fn preview_renders_embedded_docs() {
    let config = Config::default();

    let html = preview(&config, "", Some("ja")).await.unwrap();
    assert!(html.contains(r#"<html lang="ja">"#));
    assert!(html.contains("container-index"));

    let html = preview(&config, "#/en/getting-started.html", None)
        .await
        .unwrap();
    assert!(html.contains("<h1>Getting started</h1>"));
    assert!(html.contains(r##"href="#/en/index.html" data-router-link="true""##));

    let html = preview(&config, "#/en/nothing-here.html", None).await.unwrap();
    assert!(html.contains("error-panel"));
    assert!(html.contains("/markdown/en/nothing-here.md (HTTP 404)"));
}
