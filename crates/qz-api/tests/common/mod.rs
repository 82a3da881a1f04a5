use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use qz_api::{ApiState, router, store::TopicStore};
use serde::{Serialize, de::DeserializeOwned};
use tower::ServiceExt;

const ORIGIN: &str = "http://localhost:8080";

/// Full app over an empty store
pub fn empty_app() -> TestApp {
    TestApp::over(TopicStore::new())
}

/// Full app over the stock topics
pub fn seeded_app() -> TestApp {
    TestApp::over(TopicStore::seeded())
}

/// In-process app, driven one request at a time
pub struct TestApp {
    router: Router,
}

impl TestApp {
    fn over(store: TopicStore) -> Self {
        Self {
            router: router::app(ApiState::new(store), &[ORIGIN.to_string()]),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();

        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body: body.collect().await.unwrap().to_bytes().to_vec(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(empty(Method::GET, uri)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(empty(Method::DELETE, uri)).await
    }

    pub async fn post_json(&self, uri: &str, body: &impl Serialize) -> TestResponse {
        self.send(with_json(Method::POST, uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &impl Serialize) -> TestResponse {
        self.send(with_json(Method::PUT, uri, body)).await
    }
}

fn empty(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: Method, uri: &str, body: &impl Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(self.status, expected, "body: {}", self.text());
    }
}
