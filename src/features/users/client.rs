//! Client helpers for user endpoints. These functions keep endpoint paths
//! centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{delete, get_json, post_json, put_json, AppError, Transport},
    features::users::types::{UserId, UserPayload, UserRecord},
};

pub const MISSING_ID: &str = "Usuario sin identificador";

/// Fetches the full user list.
pub async fn list_users(transport: &impl Transport) -> Result<Vec<UserRecord>, AppError> {
    get_json(transport, &["usuarios"]).await
}

pub async fn create_user(
    transport: &impl Transport,
    payload: &UserPayload,
) -> Result<(), AppError> {
    post_json(transport, &["crearusuario"], payload).await
}

/// Updates a user by id after basic input validation.
pub async fn update_user(
    transport: &impl Transport,
    id: &UserId,
    payload: &UserPayload,
) -> Result<(), AppError> {
    require_id(id)?;
    put_json(transport, &["actualizarusuario", id.as_str()], payload).await
}

/// Deletes a user by id after basic input validation.
pub async fn delete_user(transport: &impl Transport, id: &UserId) -> Result<(), AppError> {
    require_id(id)?;
    delete(transport, &["eliminarusuario", id.as_str()]).await
}

fn require_id(id: &UserId) -> Result<(), AppError> {
    if id.is_empty() {
        return Err(AppError::Validation(MISSING_ID.to_string()));
    }
    Ok(())
}
