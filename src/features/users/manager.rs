//! Record manager for the user screen: the fetched list, the create/edit draft
//! and the error banner, plus the async drivers that run each operation.
//!
//! Every successful mutation is followed by a full re-fetch; nothing is patched
//! locally. List responses carry a sequence number so a slow, older response
//! can never overwrite a newer one.

use crate::{
    app_lib::{AppError, StateCell, Transport},
    features::users::{
        client,
        confirm::ConfirmDelete,
        types::{UserId, UserPayload, UserRecord},
    },
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

pub const LOAD_FAILED: &str = "Error al cargar usuarios";
pub const CREATE_FAILED: &str = "Error al crear usuario";
pub const UPDATE_FAILED: &str = "Error al actualizar usuario";
pub const DELETE_FAILED: &str = "Error al eliminar usuario";
pub const MISSING_CREATE_FIELDS: &str = "Por favor complete nombre, correo y contraseña";
pub const MISSING_UPDATE_FIELDS: &str = "Por favor complete nombre y correo";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DraftMode {
    #[default]
    Create,
    Edit(UserId),
}

/// Form state for the record being composed. The password is never pre-filled.
#[derive(Debug)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    password: SecretString,
    mode: DraftMode,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: SecretString::from(String::new()),
            mode: DraftMode::Create,
        }
    }
}

impl UserDraft {
    #[cfg(test)]
    pub fn mode(&self) -> &DraftMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Edit(_))
    }

    /// Current password input, for binding the form field.
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

/// What a validated draft turns into.
#[derive(Debug)]
pub enum SaveRequest {
    Create(UserPayload),
    Update(UserId, UserPayload),
}

impl SaveRequest {
    fn fallback(&self) -> &'static str {
        match self {
            Self::Create(_) => CREATE_FAILED,
            Self::Update(..) => UPDATE_FAILED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListTicket(u64);

#[derive(Debug, Default)]
pub struct RecordManager {
    users: Vec<UserRecord>,
    draft: UserDraft,
    error: Option<String>,
    issued: u64,
    applied: u64,
}

impl RecordManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_name(&mut self, value: String) {
        self.draft.name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.draft.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.draft.password = SecretString::from(value);
    }

    /// Loads a record's visible fields into the draft and targets it for update.
    pub fn start_edit(&mut self, user: &UserRecord) {
        self.draft = UserDraft {
            name: user.name.clone(),
            email: user.email.clone(),
            password: SecretString::from(String::new()),
            mode: DraftMode::Edit(user.id.clone()),
        };
    }

    /// Back to an empty create draft, no request involved.
    pub fn cancel_edit(&mut self) {
        self.draft = UserDraft::default();
    }

    pub fn begin_list(&mut self) -> ListTicket {
        self.issued += 1;
        ListTicket(self.issued)
    }

    /// Applies a list outcome unless a newer one already landed. A failure keeps
    /// the previous list on screen. Returns whether the outcome was applied.
    pub fn apply_list(
        &mut self,
        ticket: ListTicket,
        outcome: Result<Vec<UserRecord>, AppError>,
    ) -> bool {
        if ticket.0 <= self.applied {
            debug!(
                ticket = ticket.0,
                applied = self.applied,
                "discarding stale user list response"
            );
            return false;
        }
        self.applied = ticket.0;

        match outcome {
            Ok(users) => {
                debug!(count = users.len(), "user list refreshed");
                self.users = users;
            }
            Err(err) => {
                warn!(error = %err, "failed to load users");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        true
    }

    /// Checks required fields for the current mode and snapshots the draft.
    /// The password is only required when creating.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        let name = self.draft.name.as_str();
        let email = self.draft.email.as_str();
        let password = self.draft.password.expose_secret();

        let (complete, missing) = match self.draft.mode {
            DraftMode::Create => (
                !name.is_empty() && !email.is_empty() && !password.is_empty(),
                MISSING_CREATE_FIELDS,
            ),
            DraftMode::Edit(_) => (!name.is_empty() && !email.is_empty(), MISSING_UPDATE_FIELDS),
        };
        if !complete {
            self.error = Some(missing.to_string());
            return None;
        }

        let payload = UserPayload {
            name: name.to_string(),
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
        };
        Some(match &self.draft.mode {
            DraftMode::Create => SaveRequest::Create(payload),
            DraftMode::Edit(id) => SaveRequest::Update(id.clone(), payload),
        })
    }

    /// Success resets the draft and asks for a re-fetch; failure keeps the draft
    /// (and edit target) for correction. Returns whether to re-fetch.
    pub fn finish_save(&mut self, request: &SaveRequest, outcome: &Result<(), AppError>) -> bool {
        match outcome {
            Ok(()) => {
                self.draft = UserDraft::default();
                self.error = None;
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to save user");
                self.error = Some(err.user_message(request.fallback()));
                false
            }
        }
    }

    /// Returns whether to re-fetch.
    pub fn finish_delete(&mut self, outcome: &Result<(), AppError>) -> bool {
        match outcome {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to delete user");
                self.error = Some(err.user_message(DELETE_FAILED));
                false
            }
        }
    }
}

/// Fetches the full list and replaces the displayed one.
pub(crate) async fn refresh_users<C, T>(manager: &C, transport: &T)
where
    C: StateCell<RecordManager>,
    T: Transport,
{
    let Some(ticket) = manager.update_with(RecordManager::begin_list) else {
        return;
    };
    let outcome = client::list_users(transport).await;
    manager.update_with(|state| state.apply_list(ticket, outcome));
}

/// Submits the draft as a create or an update, depending on its mode.
pub(crate) async fn save_draft<C, T>(manager: &C, transport: &T)
where
    C: StateCell<RecordManager>,
    T: Transport,
{
    let Some(request) = manager.update_with(RecordManager::begin_save).flatten() else {
        return;
    };

    let outcome = match &request {
        SaveRequest::Create(payload) => client::create_user(transport, payload).await,
        SaveRequest::Update(id, payload) => client::update_user(transport, id, payload).await,
    };
    if outcome.is_ok() {
        match &request {
            SaveRequest::Create(_) => info!("user created"),
            SaveRequest::Update(id, _) => info!(user_id = %id, "user updated"),
        }
    }

    if manager.update_with(|state| state.finish_save(&request, &outcome)) == Some(true) {
        refresh_users(manager, transport).await;
    }
}

/// Deletes `user` once `confirm` agrees.
pub(crate) async fn delete_user<C, T, P>(manager: &C, transport: &T, confirm: &P, user: &UserRecord)
where
    C: StateCell<RecordManager>,
    T: Transport,
    P: ConfirmDelete,
{
    if !confirm.confirm(user) {
        debug!(user_id = %user.id, "delete declined");
        return;
    }

    let outcome = client::delete_user(transport, &user.id).await;
    if outcome.is_ok() {
        info!(user_id = %user.id, "user deleted");
    }

    if manager.update_with(|state| state.finish_delete(&outcome)) == Some(true) {
        refresh_users(manager, transport).await;
    }
}
