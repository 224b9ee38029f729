use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use shopfront_storefront::present::FALLBACK_MESSAGE;
use shopfront_storefront::{
    app, bootstrap, Document, FetchError, FetchOutcome, FetchPipeline, HttpTransport, CONTAINER_ID,
};

struct CatalogServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogServer {
    async fn spawn() -> Self {
        let app = Router::new()
            .route("/products", get(|| async { Json(catalog()) }))
            .route("/legacy", get(|| async { Json(legacy_catalog()) }))
            .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/html", get(|| async { "<html>maintenance</html>" }))
            .route("/wrapped", get(|| async { Json(json!({ "products": catalog() })) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn pipeline(&self, path: &str) -> FetchPipeline<HttpTransport> {
        FetchPipeline::new(HttpTransport::new(), format!("{}{}", self.base_url, path))
    }
}

impl Drop for CatalogServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Current API shape: nested `fields`, price in cents.
fn catalog() -> serde_json::Value {
    json!([
        { "id": "rec43w3ipXvP28vog", "fields": { "name": "high-back bench", "price": 9999,
          "image": [{ "url": "https://cdn.test/bench.jpg" }] } },
        { "id": "rec4f2RIftFCb7aHh", "fields": { "name": "albany table", "price": 79999,
          "image": [{ "thumbnails": { "large": { "url": "https://cdn.test/table-large.jpg" } } }] } },
        { "id": "rec8kkCmSiMkbkiko", "fields": { "name": "accent chair", "price": 25999 } },
        { "id": "recBohCqQsot4Q4II", "fields": { "name": "wooden table", "price": 45999 } },
        { "id": "recDG1JRZnbpRHpoy", "fields": { "name": "dining table", "price": 6999 } },
        { "id": "recNWGyP7kjFhSqw3", "fields": { "name": "sofa set", "price": 69999 } },
        { "id": "recZEougL5bbY4AEx", "fields": { "name": "modern bookshelf", "price": 8999 } }
    ])
}

/// Older flat shape: top-level fields, dollar prices, string images.
fn legacy_catalog() -> serde_json::Value {
    json!([
        { "id": 1, "name": "lamp", "price": 25, "image": "https://cdn.test/lamp.jpg" },
        { "id": 2, "price": "12.50", "images": [{ "url": "https://cdn.test/rug.jpg" }] }
    ])
}

#[tokio::test]
async fn renders_first_five_products_from_live_server() {
    let server = CatalogServer::spawn().await;
    let pipeline = server.pipeline("/products");
    let mut page = Document::storefront();

    let report = pipeline.display_products(&mut page).await;

    assert_eq!(report.outcome, FetchOutcome::Succeeded { items: 7 });
    let cards = page.find_by_id(CONTAINER_ID).unwrap().children();
    assert_eq!(cards.len(), 5);

    let html = page.to_html();
    assert!(html.contains(r#"<img src="https://cdn.test/bench.jpg" alt="high-back bench">"#));
    assert!(html.contains(r#"src="https://cdn.test/table-large.jpg""#));
    assert!(html.contains("<span>$99.99</span><span>rec43w3i</span>"));
    assert!(html.contains("<span>$799.99</span>"));
    assert!(html.contains("dining table"));
    assert!(!html.contains("sofa set"));
    assert!(!html.contains("modern bookshelf"));
}

#[tokio::test]
async fn legacy_shape_is_normalized() {
    let server = CatalogServer::spawn().await;
    let mut page = Document::storefront();

    server.pipeline("/legacy").display_products(&mut page).await;

    let cards = page.find_by_id(CONTAINER_ID).unwrap().children();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].text_content(), "lamp$25.001");
    assert_eq!(cards[1].text_content(), "Unnamed Product$12.502");
    assert_eq!(cards[1].children()[0].attr("src"), Some("https://cdn.test/rug.jpg"));
}

#[tokio::test]
async fn server_error_shows_fallback_message() {
    let server = CatalogServer::spawn().await;
    let mut page = Document::storefront();

    let report = server.pipeline("/broken").display_products(&mut page).await;

    assert_eq!(report.error(), Some(&FetchError::Status(500)));
    let container = page.find_by_id(CONTAINER_ID).unwrap();
    assert_eq!(container.children().len(), 1);
    assert_eq!(container.text_content(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn unexpected_bodies_are_decode_failures() {
    let server = CatalogServer::spawn().await;

    for path in ["/html", "/wrapped"] {
        let mut page = Document::storefront();
        let report = server.pipeline(path).display_products(&mut page).await;
        assert!(
            matches!(report.error(), Some(FetchError::Decode(_))),
            "{path}: {:?}",
            report.outcome
        );
        assert_eq!(
            page.find_by_id(CONTAINER_ID).unwrap().text_content(),
            FALLBACK_MESSAGE
        );
    }
}

#[tokio::test]
async fn missing_route_is_status_failure() {
    let server = CatalogServer::spawn().await;
    let report = server.pipeline("/nope").log_product_names().await;
    assert_eq!(report.error(), Some(&FetchError::Status(404)));
}

#[tokio::test]
async fn bootstrap_runs_both_pipelines_against_server() {
    let server = CatalogServer::spawn().await;
    let pipeline = server.pipeline("/products");
    let mut page = Document::storefront();

    let (names, display) = bootstrap(&pipeline, &mut page).await;

    assert_eq!(names.outcome, FetchOutcome::Succeeded { items: 7 });
    assert_eq!(display.outcome, FetchOutcome::Succeeded { items: 7 });
    assert_eq!(page.find_by_id(CONTAINER_ID).unwrap().children().len(), 5);
}

#[tokio::test]
async fn unreachable_server_leaves_pipelines_contained() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let pipeline = FetchPipeline::new(HttpTransport::new(), format!("http://{addr}/products"));
    let mut page = Document::storefront();

    let (names, display) = bootstrap(&pipeline, &mut page).await;

    assert!(matches!(names.error(), Some(FetchError::Transport(_))));
    assert!(matches!(display.error(), Some(FetchError::Transport(_))));
    assert_eq!(
        page.find_by_id(CONTAINER_ID).unwrap().text_content(),
        FALLBACK_MESSAGE
    );
}

#[tokio::test]
async fn render_page_fills_storefront_from_server() {
    let server = CatalogServer::spawn().await;

    let page = app::render_page(&server.pipeline("/products")).await;

    assert_eq!(page.find_by_id(CONTAINER_ID).unwrap().children().len(), 5);
    assert!(page.to_html().contains("high-back bench"));
}

#[tokio::test]
async fn write_page_creates_html_file() {
    let server = CatalogServer::spawn().await;
    let page = app::render_page(&server.pipeline("/broken")).await;

    let path = std::env::temp_dir().join(format!("shopfront-{}.html", std::process::id()));
    app::write_page(&page, Some(&path)).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(FALLBACK_MESSAGE));
}

#[test]
fn write_page_reports_unwritable_path() {
    let dir = std::env::temp_dir().join(format!("shopfront-missing-{}", std::process::id()));
    let path = dir.join("index.html");

    let err = app::write_page(&Document::storefront(), Some(&path)).unwrap_err();

    assert!(err.to_string().contains("failed to write page"), "{err}");
}
