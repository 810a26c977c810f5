use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::access::models::UserClaims;

pub async fn profile(
    Extension(claims): Extension<UserClaims>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ProfileResponseData { user: claims },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub user: UserClaims,
}
