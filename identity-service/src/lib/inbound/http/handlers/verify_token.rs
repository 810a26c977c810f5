use axum::http::StatusCode;
use axum::Extension;

use super::profile::ProfileResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::access::models::UserClaims;

/// Reaching this handler means the token already passed verification.
pub async fn verify_token(
    Extension(claims): Extension<UserClaims>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    Ok(ApiSuccess::with_message(
        StatusCode::OK,
        "Token is valid",
        ProfileResponseData { user: claims },
    ))
}
