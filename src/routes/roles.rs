use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use serde::Serialize;

use crate::models::role::{ChairPosition, Role, RoleInfo};
use crate::models::DataResponse;
use crate::pagination::{paginate, PaginatedResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChairInfo {
    pub id: ChairPosition,
    pub label: &'static str,
    pub pages: &'static [&'static str],
}

pub async fn list_roles(state: State<AppState>, uri: Uri) -> Json<PaginatedResponse<RoleInfo>> {
    let pagination = state.pagination_for(&uri);
    Json(paginate(&Role::ALL, pagination).map(RoleInfo::from))
}

pub async fn list_chairs(state: State<AppState>) -> Json<DataResponse<Vec<ChairInfo>>> {
    let chairs = ChairPosition::ALL
        .into_iter()
        .map(|chair| ChairInfo {
            id: chair,
            label: chair.label(),
            pages: state.policy.chair_grants(chair).unwrap_or_default(),
        })
        .collect();
    Json(DataResponse::new(chairs))
}
