use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::access::errors::PasswordPolicyError;
use crate::access::models::LoginCommand;
use crate::access::models::Password;
use crate::access::ports::AccessServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::models::EmailAddress;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let outcome = state.access_service.login(body.try_into_command()?).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: outcome.token,
            user: (&outcome.user).into(),
        },
    ))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseLoginRequestError {
    #[error("Please provide a valid email address: {0}")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Password(#[from] PasswordPolicyError),
}

impl LoginRequestBody {
    fn try_into_command(self) -> Result<LoginCommand, ParseLoginRequestError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(LoginCommand::new(email, password))
    }
}

impl From<ParseLoginRequestError> for ApiError {
    fn from(err: ParseLoginRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: UserData,
}
