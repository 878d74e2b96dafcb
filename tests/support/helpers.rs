// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use once_cell::sync::Lazy;
use serde_json::Value;
use tower::util::ServiceExt as _;

use folio_core::application::services::ApplicationServices;
use folio_core::domain::content::{ContentCorpus, ContentItem, ContentType, Difficulty};
use folio_core::domain::service::ServiceCatalog;
use folio_core::infrastructure::catalog::parse_catalog;
use folio_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

use super::builders::ContentItemBuilder;

pub const SAMPLE_CATALOG: &str = r#"
categories:
  - category: Security
    services:
      - id: audit-service
        name:
          en: Smart Contract Audit
          es: Auditoría de contratos
        shortDescription: Line-by-line review of Solidity code
        priceRange: { min: 5000, max: 20000 }
  - category: Education
    services:
      - id: bitcoin-course
        name: Bitcoin Course
        shortDescription: Self-custody from first principles
        priceRange: { min: 200, max: 400 }
strategies:
  - serviceId: audit-service
    keywords: [Solidity, Reentrancy]
    contentTypes: [tutorial, case-study]
"#;

static CATALOG: Lazy<Arc<dyn ServiceCatalog>> =
    Lazy::new(|| Arc::new(parse_catalog(SAMPLE_CATALOG).expect("sample catalog parses")));

pub fn sample_catalog() -> Arc<dyn ServiceCatalog> {
    Arc::clone(&CATALOG)
}

pub fn sample_items() -> Vec<ContentItem> {
    vec![
        ContentItemBuilder::new("solidity-security-basics")
            .title("Solidity Security Basics")
            .description("Common pitfalls in smart contracts")
            .category("Security")
            .tags(&["solidity", "security"])
            .content_type(ContentType::Tutorial)
            .primary_service("audit-service")
            .day(10)
            .featured()
            .build(),
        ContentItemBuilder::new("reentrancy-explained")
            .title("Reentrancy Explained")
            .category("Security")
            .tags(&["solidity", "reentrancy"])
            .content_type(ContentType::Tutorial)
            .difficulty(Difficulty::Intermediate)
            .targeting(&["audit-service"])
            .day(8)
            .build(),
        ContentItemBuilder::new("lightning-news")
            .title("Lightning Network Update")
            .category("Bitcoin")
            .tags(&["lightning"])
            .content_type(ContentType::News)
            .day(12)
            .build(),
        ContentItemBuilder::new("self-custody-guide")
            .title("A Guide to Self-Custody")
            .category("Bitcoin")
            .tags(&["wallets"])
            .primary_service("bitcoin-course")
            .day(3)
            .body("one two three four five")
            .build(),
    ]
}

pub fn make_test_state(items: Vec<ContentItem>) -> HttpState {
    let corpus = Arc::new(ContentCorpus::new(items).expect("unique slugs"));
    HttpState {
        services: Arc::new(ApplicationServices::new(corpus, sample_catalog())),
    }
}

pub fn make_test_router_with(items: Vec<ContentItem>) -> axum::Router {
    build_router(make_test_state(items), &RouterOptions::default())
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(sample_items())
}

/// Issue a GET and return the status with the decoded JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

pub fn slugs(items: &Value) -> Vec<String> {
    items
        .as_array()
        .expect("array of items")
        .iter()
        .map(|item| item["slug"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
