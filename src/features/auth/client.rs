//! Client wrapper for the login endpoint.

use crate::{
    app_lib::{post_json_response, AppError, Transport},
    features::auth::types::{LoginCredentials, LoginResponse},
};

/// Exchanges credentials for a token and the user's record.
/// The request body contains the password and must never be logged.
pub async fn login(
    transport: &impl Transport,
    credentials: &LoginCredentials,
) -> Result<LoginResponse, AppError> {
    post_json_response(transport, &["login"], credentials).await
}
