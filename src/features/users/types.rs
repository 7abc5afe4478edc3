//! Wire types for user records. The backend uses Spanish, capitalized field
//! names (`IdUsuario`, `Nombre`, `Correo`); the login response and older
//! persisted sessions use lowercase names, so both spellings decode.

use secrecy::{ExposeSecret, SecretString};
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Server-assigned identifier. The backend may send it as a number or a string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(number) => Self(number.to_string()),
            RawId::Text(text) => Self(text),
        })
    }
}

/// A user as listed by the backend. Passwords are write-only and never part of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "IdUsuario", alias = "id", default)]
    pub id: UserId,
    #[serde(rename = "Nombre", alias = "nombre", default)]
    pub name: String,
    #[serde(rename = "Correo", alias = "correo", default)]
    pub email: String,
}

/// Body for create and update calls. An empty password on update means "keep it".
#[derive(Debug)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl Serialize for UserPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("UserPayload", 3)?;
        state.serialize_field("Nombre", &self.name)?;
        state.serialize_field("Correo", &self.email)?;
        state.serialize_field("Contrasena", self.password.expose_secret())?;
        state.end()
    }
}
