use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use meowbox_docs::assets::DocsAssets;
use meowbox_docs::server::{configure, ServerState};

fn state() -> web::Data<ServerState> {
    web::Data::new(ServerState::new(DocsAssets::Embedded, "v0.1.x"))
}

#[actix_rt::test]
async fn index_uses_accept_language() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::ACCEPT_LANGUAGE, "ja-JP,ja;q=0.9,en;q=0.5"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains(r#"<html lang="ja">"#));
    assert!(body.contains("v0.1.x"));
    assert!(!body.contains("{{"));
}

#[actix_rt::test]
async fn static_assets_carry_content_type() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/css/layout.css").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css; charset=utf-8"
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/markdown/en/index.md")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).starts_with("# MeowBox Docs"));
}

#[actix_rt::test]
async fn well_known_is_empty() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
    let req = test::TestRequest::get()
        .uri("/.well-known/appspecific/com.chrome.devtools.json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_rt::test]
async fn unknown_paths_get_the_404_page() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    for uri in ["/nope", "/index.html", "/css/missing.css"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("title-404"), "{}", uri);
    }
}

#[actix_rt::test]
async fn directory_docs_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/site.css"), "a{}").unwrap();

    let state = web::Data::new(ServerState::new(
        DocsAssets::Directory(dir.path().to_path_buf()),
        "v0.1.x",
    ));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/css/site.css").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // no templates in this tree: plain fallbacks
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/x").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn client_bundle_is_served() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    for uri in ["/js/index.js", "/js/layout.js", "/js/route.js", "/js/404.js", "/js/i18n.js"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/javascript; charset=utf-8",
            "{}",
            uri
        );
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains(r#"<script src="/js/index.js""#));

    for (uri, content_type) in [
        ("/img/background_v0.1.x.svg", "image/svg+xml"),
        ("/favicon.ico", "image/x-icon"),
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), content_type);
    }
}

#[actix_rt::test]
async fn i18n_script_carries_every_language() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/js/i18n.js").to_request()).await;
    let body = test::read_body(resp).await;
    let script = String::from_utf8_lossy(&body);
    assert!(script.contains("404_Go_Home"));
    assert!(script.contains("日本語"));
    assert!(script.contains("zh-TW"));
    assert!(!script.contains("{{"));
}

#[actix_rt::test]
async fn not_found_page_is_localised() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/missing")
        .insert_header((header::ACCEPT_LANGUAGE, "ja"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("ドキュメントが見つかりません"));
    assert!(body.contains("ホームページに戻る"));
    assert!(body.contains(r#"<html lang="ja">"#));
    assert!(!body.contains("{{"));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/missing").to_request()).await;
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("404 Docs Not Found"));
}

#[actix_rt::test]
async fn encoded_file_names_are_decoded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("markdown/en")).unwrap();
    std::fs::create_dir_all(dir.path().join("markdown/ja")).unwrap();
    std::fs::write(dir.path().join("markdown/en/hello world.md"), "# Hello").unwrap();
    std::fs::write(dir.path().join("markdown/ja/はじめに.md"), "# はじめに").unwrap();
    std::fs::write(dir.path().join("404.html"), "gone").unwrap();

    let state = web::Data::new(ServerState::new(
        DocsAssets::Directory(dir.path().to_path_buf()),
        "v0.1.x",
    ));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/markdown/en/hello%20world.md")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "# Hello");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/markdown/ja/%E3%81%AF%E3%81%98%E3%82%81%E3%81%AB.md")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "# はじめに");

    // an encoded separator still cannot climb out of the prefix
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/css/..%2F404.html").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test::read_body(resp).await, "gone");
}
