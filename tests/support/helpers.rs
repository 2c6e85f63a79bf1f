// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use blog_core::application::services::ApplicationServices;
use blog_core::domain::article::{Article, ArticleRepository, NewArticle};
use blog_core::infrastructure::{repositories::InMemoryArticleRepository, time::SystemClock};
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn in_memory_store() -> Arc<dyn ArticleRepository> {
    Arc::new(InMemoryArticleRepository::new(Arc::new(SystemClock)))
}

pub fn make_test_router_with_store(store: Arc<dyn ArticleRepository>) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(store));
    build_router(HttpState { services }, &["*".to_string()])
}

/// Router over a fresh in-memory store, plus the store for seeding.
pub fn make_test_router() -> (axum::Router, Arc<dyn ArticleRepository>) {
    let store = in_memory_store();
    (make_test_router_with_store(Arc::clone(&store)), store)
}

pub async fn save_article(
    store: &dyn ArticleRepository,
    author: &str,
    title: &str,
    content: &str,
) -> Article {
    NewArticle::new(Some(author.into()), Some(title.into()), Some(content.into()))
        .expect("valid article")
        .save(store)
        .await
        .expect("save article")
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Article responses carry exactly `id`, `author`, `title` and `content`, all strings.
pub fn assert_article_shape(value: &Value) {
    let object = value.as_object().expect("article object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["author", "content", "id", "title"]);
    for key in &keys {
        assert!(object[*key].is_string(), "{key} should be a string");
    }
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["error"].as_str(), Some(expected_error));
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
    json
}
