use axum::http::Uri;

use crate::config::{Config, PaginationConfig};
use crate::middleware::permissions::RouteAccessPolicy;
use crate::pagination::Pagination;

#[derive(Clone)]
pub struct AppState {
    pub pagination: PaginationConfig,
    pub policy: &'static RouteAccessPolicy,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            pagination: config.pagination,
            policy: RouteAccessPolicy::dashboard(),
        }
    }

    /// Resolve `page`/`limit` from a request URI with the configured bounds.
    pub fn pagination_for(&self, uri: &Uri) -> Pagination {
        Pagination::from_uri(
            uri,
            self.pagination.default_limit,
            self.pagination.max_limit,
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            pagination: PaginationConfig::default(),
            policy: RouteAccessPolicy::dashboard(),
        }
    }
}
