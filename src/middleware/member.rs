use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

pub const ROLE_HEADER: &str = "X-Member-Role";
pub const CHAIR_HEADER: &str = "X-Member-Chair";

/// Role and chair of the member making the request, as supplied by the
/// upstream session layer. Values are kept as raw strings so unknown roles
/// and chairs reach the access table unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberContext {
    pub role: String,
    pub chair: Option<String>,
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl<S: Send + Sync> FromRequestParts<S> for MemberContext {
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let role = header_value(parts, ROLE_HEADER);
        let chair = header_value(parts, CHAIR_HEADER);

        async move {
            let role = role.ok_or_else(|| {
                AppError::Unauthorized("missing member role".to_string())
            })?;
            Ok(MemberContext { role, chair })
        }
    }
}
