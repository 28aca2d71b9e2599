#![allow(dead_code)]

use axum::body::Body;
use chapterhouse::config::{Config, PaginationConfig};
use chapterhouse::middleware::member::{CHAIR_HEADER, ROLE_HEADER};
use chapterhouse::routes;
use chapterhouse::state::AppState;
use http::Request;

/// Router over the default access table and pagination bounds.
pub fn test_app() -> axum::Router {
    routes::router(AppState::default())
}

/// Router with custom pagination bounds.
pub fn test_app_with_limits(default_limit: u32, max_limit: u32) -> axum::Router {
    let config = Config {
        port: 0,
        pagination: PaginationConfig {
            default_limit,
            max_limit,
        },
    };
    routes::router(AppState::new(&config))
}

/// A member as the upstream session layer would describe them.
pub struct TestMember {
    pub role: &'static str,
    pub chair: Option<&'static str>,
}

impl TestMember {
    pub fn new(role: &'static str) -> Self {
        Self { role, chair: None }
    }

    pub fn with_chair(role: &'static str, chair: &'static str) -> Self {
        Self {
            role,
            chair: Some(chair),
        }
    }

    /// Build a GET request carrying this member's role and chair headers.
    pub fn get(&self, uri: &str) -> Request<Body> {
        let mut builder = Request::builder().uri(uri).header(ROLE_HEADER, self.role);
        if let Some(chair) = self.chair {
            builder = builder.header(CHAIR_HEADER, chair);
        }
        builder.body(Body::empty()).unwrap()
    }
}

/// Build a GET request with no member headers.
pub fn anonymous_get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Parse a response body into a `serde_json::Value`.
pub async fn parse_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
