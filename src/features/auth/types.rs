//! Request and response types for the login call. Credentials carry the
//! password, so they must never be logged.

use crate::features::users::types::UserRecord;
use secrecy::{ExposeSecret, SecretString};
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

#[derive(Debug)]
pub struct LoginCredentials {
    pub email: String,
    pub password: SecretString,
}

impl Serialize for LoginCredentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LoginCredentials", 2)?;
        state.serialize_field("Correo", &self.email)?;
        state.serialize_field("Contrasena", self.password.expose_secret())?;
        state.end()
    }
}

/// Successful login payload. Both fields are required; a body missing either is
/// treated like any other undecodable response.
#[derive(Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: UserRecord,
}
