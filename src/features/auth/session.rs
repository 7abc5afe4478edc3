//! Session model and persistence. Storage mirrors the in-memory session; it is
//! never the source of truth once the app is running. Restoring trusts the
//! stored pair without a server round trip, but anything incomplete or
//! unparseable wipes both slots and starts logged out.

use crate::{
    app_lib::{storage::KeyValueStore, AppError},
    features::users::types::UserRecord,
};
use std::fmt;
use tracing::{debug, info, warn};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "usuario";

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

impl Session {
    /// Name shown in the header while this session is active.
    pub fn display_name(&self) -> &str {
        &self.user.name
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

pub(crate) trait SessionRepository {
    /// `Ok(None)` when nothing (or only half a session) is stored; `Err` when
    /// the stored record cannot be decoded.
    fn load(&self) -> Result<Option<Session>, AppError>;
    fn save(&self, session: &Session) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

/// Keeps the session in two string slots: the raw token and the JSON user record.
#[derive(Clone, Debug)]
pub struct StorageSessionRepository<S> {
    store: S,
}

impl<S> StorageSessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> SessionRepository for StorageSessionRepository<S> {
    fn load(&self) -> Result<Option<Session>, AppError> {
        let token = self.store.get(TOKEN_KEY)?.filter(|token| !token.is_empty());
        let user = self.store.get(USER_KEY)?;
        let (Some(token), Some(user)) = (token, user) else {
            return Ok(None);
        };

        let user: UserRecord = serde_json::from_str(&user)
            .map_err(|err| AppError::Parse(format!("Stored user record is invalid: {err}")))?;
        Ok(Some(Session { token, user }))
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let user = serde_json::to_string(&session.user).map_err(|err| {
            AppError::Serialization(format!("Failed to encode user record: {err}"))
        })?;
        self.store.set(TOKEN_KEY, &session.token)?;
        self.store.set(USER_KEY, &user)
    }

    fn clear(&self) -> Result<(), AppError> {
        let token = self.store.remove(TOKEN_KEY);
        let user = self.store.remove(USER_KEY);
        token.and(user)
    }
}

/// Startup restore. Never surfaces an error: a broken or partial session is
/// wiped and the app starts logged out.
pub(crate) fn restore_session(repository: &impl SessionRepository) -> Option<Session> {
    match repository.load() {
        Ok(Some(session)) => {
            debug!(user_id = %session.user.id, "restored persisted session");
            Some(session)
        }
        Ok(None) => {
            debug!("no persisted session");
            clear_slots(repository);
            None
        }
        Err(err) => {
            warn!(error = %err, "discarding corrupted persisted session");
            clear_slots(repository);
            None
        }
    }
}

/// Logout: wipes both slots whatever state they are in.
pub(crate) fn end_session(repository: &impl SessionRepository) {
    clear_slots(repository);
    info!("session ended");
}

fn clear_slots(repository: &impl SessionRepository) {
    if let Err(err) = repository.clear() {
        warn!(error = %err, "failed to clear persisted session");
    }
}
