use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use tower::util::ServiceExt as _;

mod support;

async fn request(uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    support::make_test_router().oneshot(req).await.unwrap()
}

/// Unknown slugs return 404 with an ErrorResponse body.
#[tokio::test]
async fn e2e_get_content_by_unknown_slug_returns_404() {
    let resp = request("/api/v1/content/nonexistent").await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_related_for_unknown_slug_returns_404() {
    let resp = request("/api/v1/content/nonexistent/related").await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// A slug that is only whitespace is rejected as a bad request.
#[tokio::test]
async fn e2e_blank_slug_returns_400() {
    let resp = request("/api/v1/content/%20").await;
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = request("/api/v1/content/%20/related").await;
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn e2e_unknown_service_returns_404() {
    let resp = request("/api/v1/services/nonexistent-service").await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_strategy_for_unknown_service_returns_404() {
    let resp = request("/api/v1/services/nonexistent-service/strategy").await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_unrouted_path_returns_404() {
    let resp = request("/api/v1/unknown").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn e2e_post_to_read_only_route_is_rejected() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/content")
        .body(Body::empty())
        .unwrap();
    let resp = support::make_test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
