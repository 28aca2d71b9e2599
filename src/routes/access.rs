use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::middleware::member::MemberContext;
use crate::models::DataResponse;
use crate::pagination::{paginate, PaginatedResponse};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CheckAccessQuery {
    pub page: String,
}

#[derive(Debug, Serialize)]
pub struct AccessDecision {
    pub page: String,
    pub allowed: bool,
}

pub async fn check_access(
    state: State<AppState>,
    member: MemberContext,
    query: Result<Query<CheckAccessQuery>, QueryRejection>,
) -> Result<Json<DataResponse<AccessDecision>>, AppError> {
    let Query(params) = query?;
    if params.page.is_empty() {
        return Err(AppError::BadRequest("page must not be empty".to_string()));
    }
    let allowed = state
        .policy
        .can_access_page(&member.role, member.chair.as_deref(), &params.page);
    Ok(Json(DataResponse::new(AccessDecision {
        page: params.page,
        allowed,
    })))
}

pub async fn list_accessible_pages(
    state: State<AppState>,
    member: MemberContext,
    uri: Uri,
) -> Json<PaginatedResponse<&'static str>> {
    let pages = state
        .policy
        .accessible_pages(&member.role, member.chair.as_deref());
    Json(paginate(&pages, state.pagination_for(&uri)))
}
