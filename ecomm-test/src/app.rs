use axum::body::Body;
use axum::Router;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, IntoHeaderName, CONTENT_TYPE, LOCATION};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tower::util::ServiceExt;

use crate::json_path::resolve_path;

/// In-process HTTP test client wrapping an Axum `Router`.
///
/// Requests go through `tower::ServiceExt::oneshot`; no TCP port is bound.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn get(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::POST, path)
    }

    pub fn patch(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::DELETE, path)
    }

    /// Start building a request with an arbitrary HTTP method.
    pub fn request(&self, method: Method, path: &str) -> TestRequest<'_> {
        TestRequest {
            app: self,
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// Builder for one request against a [`TestApp`].
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl TestRequest<'_> {
    pub fn header(mut self, name: impl IntoHeaderName, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().parse().expect("invalid header value");
        self.headers.insert(name, value);
        self
    }

    /// Serialize `body` as the JSON payload and set `Content-Type: application/json`.
    pub fn json(self, body: &impl Serialize) -> Self {
        let bytes = serde_json::to_vec(body).expect("request body is not serializable");
        self.raw_json(bytes)
    }

    /// Send `body` verbatim as a JSON payload, e.g. to exercise malformed input.
    pub fn raw_json(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self.headers
            .insert(CONTENT_TYPE, "application/json".parse().expect("static header"));
        self
    }

    pub async fn send(self) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(&self.path);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let body = self.body.map(Body::from).unwrap_or_else(Body::empty);
        let request = builder.body(body).expect("failed to build request");

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse { status, headers, body }
    }
}

/// Response wrapper with status assertions, JSON-path assertions, and body helpers.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    pub fn assert_created(self) -> Self {
        self.assert_status(StatusCode::CREATED)
    }

    /// Assert 204 and an empty body.
    pub fn assert_no_content(self) -> Self {
        let resp = self.assert_status(StatusCode::NO_CONTENT);
        assert!(resp.body.is_empty(), "204 with a body: {}", resp.text());
        resp
    }

    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected {expected}, got {}\nBody: {}",
            self.status,
            self.text()
        );
        self
    }

    /// Assert the status is in the 4xx range.
    pub fn assert_client_error(self) -> Self {
        assert!(
            self.status.is_client_error(),
            "Expected a 4xx status, got {}\nBody: {}",
            self.status,
            self.text()
        );
        self
    }

    /// Assert that a JSON path resolves to the expected value.
    ///
    /// ```ignore
    /// resp.assert_json_path("items[0].name", "Widget")
    ///     .assert_json_path("items.len()", 2);
    /// ```
    pub fn assert_json_path(self, path: &str, expected: impl Into<Value>) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        let expected = expected.into();
        assert_eq!(
            actual, expected,
            "JSON path \"{path}\" assertion failed\n  Expected: {expected}\n  Actual:   {actual}\n  Body: {root}",
        );
        self
    }

    pub fn assert_json_path_fn(self, path: &str, predicate: impl FnOnce(&Value) -> bool) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        assert!(
            predicate(&actual),
            "JSON path \"{path}\" predicate failed\n  Value: {actual}\n  Body: {root}",
        );
        self
    }

    /// Extract and deserialize a value at a JSON path.
    pub fn json_path<T: DeserializeOwned>(&self, path: &str) -> T {
        let root: Value = self.json();
        let value = resolve_path(&root, path);
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            panic!("Failed to deserialize JSON path \"{path}\": {e}\n  Value: {value}\n  Body: {root}")
        })
    }

    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name: HeaderName = name.as_ref().parse().ok()?;
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `Location` header of a 201 response.
    pub fn location(&self) -> Option<&str> {
        self.header(LOCATION.as_str())
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Failed to parse JSON: {e}\nBody: {}", self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
