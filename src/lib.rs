//! Pagination and dashboard access control for the chapter website backend.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod state;

pub use middleware::permissions::{
    accessible_pages, can_access_page, is_chair_holder, is_exec_role, RouteAccessPolicy,
};
pub use pagination::{paginated_response, parse_pagination, PaginatedResponse, Pagination};
