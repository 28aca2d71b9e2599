use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::member::MemberContext;
use crate::middleware::permissions::{require_page_access, DASHBOARD_ROOT};
use crate::models::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub page: String,
    pub role: String,
    pub chair: Option<String>,
}

/// Route guard for the dashboard root.
pub async fn view_root(
    state: State<AppState>,
    member: MemberContext,
) -> Result<Json<DataResponse<DashboardView>>, AppError> {
    view(&state, member, DASHBOARD_ROOT.to_string())
}

/// Route guard for any page below the dashboard root.
pub async fn view_page(
    state: State<AppState>,
    member: MemberContext,
    Path(path): Path<String>,
) -> Result<Json<DataResponse<DashboardView>>, AppError> {
    let page = format!("{DASHBOARD_ROOT}/{}", path.trim_start_matches('/'));
    view(&state, member, page)
}

fn view(
    state: &AppState,
    member: MemberContext,
    page: String,
) -> Result<Json<DataResponse<DashboardView>>, AppError> {
    require_page_access(state.policy, &member, &page)?;
    Ok(Json(DataResponse::new(DashboardView {
        page,
        role: member.role,
        chair: member.chair,
    })))
}
