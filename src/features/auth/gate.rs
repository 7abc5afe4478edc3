//! Credential gate: the login form's state and the driver that submits it.
//!
//! Both fields are required before anything goes over the wire. While a request
//! is in flight the form is marked loading and further submits are ignored; the
//! flag is cleared on every outcome so the form can never stay stuck.

use crate::{
    app_lib::{AppError, StateCell, Transport},
    features::auth::{
        client,
        session::{Session, SessionRepository},
        types::{LoginCredentials, LoginResponse},
    },
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

pub const MISSING_CREDENTIALS: &str = "Por favor ingrese correo y contraseña";
pub const LOGIN_FAILED: &str = "Error al iniciar sesión";

#[derive(Debug)]
pub struct LoginForm {
    email: String,
    password: SecretString,
    loading: bool,
    error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: SecretString::from(String::new()),
            loading: false,
            error: None,
        }
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = SecretString::from(value);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clears the previous error, validates, and enters the loading state.
    /// Returns the credentials to send, or `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<LoginCredentials> {
        if self.loading {
            return None;
        }
        self.error = None;

        let password = self.password.expose_secret();
        if self.email.is_empty() || password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS.to_string());
            return None;
        }

        self.loading = true;
        Some(LoginCredentials {
            email: self.email.clone(),
            password: SecretString::from(password.to_string()),
        })
    }

    pub fn finish_submit(&mut self, outcome: &Result<LoginResponse, AppError>) {
        self.loading = false;
        if let Err(err) = outcome {
            self.error = Some(err.user_message(LOGIN_FAILED));
        }
    }
}

/// Submits the form once. On success the session is persisted and returned so
/// the caller can switch views; every failure ends up in the form's error.
pub(crate) async fn submit_login<C, T, R>(form: &C, transport: &T, repository: &R) -> Option<Session>
where
    C: StateCell<LoginForm>,
    T: Transport,
    R: SessionRepository,
{
    let credentials = form.update_with(LoginForm::begin_submit).flatten()?;
    let outcome = client::login(transport, &credentials).await;
    drop(credentials);
    form.update_with(|state| state.finish_submit(&outcome));

    match outcome {
        Ok(response) => {
            let session = Session {
                token: response.token,
                user: response.usuario,
            };
            if let Err(err) = repository.save(&session) {
                warn!(error = %err, "failed to persist session, continuing in memory");
            }
            info!(user_id = %session.user.id, "login succeeded");
            Some(session)
        }
        Err(err) => {
            warn!(error = %err, "login failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{submit_login, LoginForm, LOGIN_FAILED, MISSING_CREDENTIALS};
    use crate::app_lib::{
        api::Method,
        storage::{KeyValueStore, MemoryStore},
        testing::ScriptedTransport,
        AppError,
    };
    use crate::features::auth::session::{StorageSessionRepository, TOKEN_KEY, USER_KEY};
    use anyhow::Result;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    fn filled_form(email: &str, password: &str) -> RefCell<LoginForm> {
        let mut form = LoginForm::new();
        form.set_email(email.to_string());
        form.set_password(password.to_string());
        RefCell::new(form)
    }

    fn empty_repository() -> StorageSessionRepository<MemoryStore> {
        StorageSessionRepository::new(MemoryStore::default())
    }

    #[tokio::test]
    async fn missing_password_is_rejected_without_request() {
        let form = filled_form("test@test.com", "");
        let transport = ScriptedTransport::new();
        let repository = empty_repository();

        let session = submit_login(&form, &transport, &repository).await;

        assert_eq!(session, None);
        assert!(transport.requests().is_empty());
        assert_eq!(form.borrow().error(), Some(MISSING_CREDENTIALS));
        assert!(!form.borrow().is_loading());
    }

    #[tokio::test]
    async fn missing_email_is_rejected_without_request() {
        let form = filled_form("", "password123");
        let transport = ScriptedTransport::new();

        let session = submit_login(&form, &transport, &empty_repository()).await;

        assert_eq!(session, None);
        assert!(transport.requests().is_empty());
        assert_eq!(form.borrow().error(), Some(MISSING_CREDENTIALS));
    }

    #[tokio::test]
    async fn successful_login_persists_session() -> Result<()> {
        let form = filled_form("test@test.com", "password123");
        let transport = ScriptedTransport::new().respond(
            200,
            r#"{"usuario":{"id":1,"nombre":"Test User","correo":"test@test.com"},"token":"fake-token"}"#,
        );
        let repository = empty_repository();

        let session = submit_login(&form, &transport, &repository)
            .await
            .ok_or_else(|| anyhow::anyhow!("login did not produce a session"))?;

        assert_eq!(session.token, "fake-token");
        assert_eq!(session.user.name, "Test User");
        assert_eq!(form.borrow().error(), None);
        assert!(!form.borrow().is_loading());

        let store = repository.store();
        assert_eq!(store.get(TOKEN_KEY)?, Some("fake-token".to_string()));
        let stored_user: Value =
            serde_json::from_str(&store.get(USER_KEY)?.unwrap_or_default())?;
        assert_eq!(stored_user["Nombre"], "Test User");
        Ok(())
    }

    #[tokio::test]
    async fn login_posts_credentials_once() -> Result<()> {
        let form = filled_form("test@test.com", "password123");
        let transport = ScriptedTransport::new()
            .respond(200, r#"{"usuario":{"nombre":"Test User"},"token":"t"}"#);

        submit_login(&form, &transport, &empty_repository()).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path(), "/login");
        let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap_or_default())?;
        assert_eq!(
            body,
            json!({ "Correo": "test@test.com", "Contrasena": "password123" })
        );
        Ok(())
    }

    #[tokio::test]
    async fn whitespace_email_is_sent_as_typed() -> Result<()> {
        let form = filled_form("   ", "p");
        let transport =
            ScriptedTransport::new().respond(401, r#"{"error":"Credenciales inválidas"}"#);

        submit_login(&form, &transport, &empty_repository()).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap_or_default())?;
        assert_eq!(body, json!({ "Correo": "   ", "Contrasena": "p" }));
        assert_eq!(form.borrow().error(), Some("Credenciales inválidas"));
        Ok(())
    }

    #[tokio::test]
    async fn long_server_message_is_shown_unchanged() {
        let long = "x".repeat(250);
        let form = filled_form("test@test.com", "wrongpassword");
        let transport =
            ScriptedTransport::new().respond(401, &format!(r#"{{"error":"{long}"}}"#));

        submit_login(&form, &transport, &empty_repository()).await;

        assert_eq!(form.borrow().error(), Some(long.as_str()));
    }

    #[tokio::test]
    async fn rejected_login_shows_server_message() -> Result<()> {
        let form = filled_form("test@test.com", "wrongpassword");
        let transport =
            ScriptedTransport::new().respond(401, r#"{"error":"Credenciales inválidas"}"#);
        let repository = empty_repository();

        let session = submit_login(&form, &transport, &repository).await;

        assert_eq!(session, None);
        assert_eq!(form.borrow().error(), Some("Credenciales inválidas"));
        assert!(!form.borrow().is_loading());
        assert_eq!(repository.store().get(TOKEN_KEY)?, None);
        Ok(())
    }

    #[tokio::test]
    async fn transport_failure_clears_loading_and_uses_fallback() {
        let form = filled_form("test@test.com", "password123");
        let transport =
            ScriptedTransport::new().fail(AppError::Network("Failed to fetch".to_string()));

        let session = submit_login(&form, &transport, &empty_repository()).await;

        assert_eq!(session, None);
        assert_eq!(form.borrow().error(), Some(LOGIN_FAILED));
        assert!(!form.borrow().is_loading());
    }

    #[tokio::test]
    async fn success_body_without_token_is_a_failure() {
        let form = filled_form("test@test.com", "password123");
        let transport =
            ScriptedTransport::new().respond(200, r#"{"usuario":{"nombre":"Test User"}}"#);

        let session = submit_login(&form, &transport, &empty_repository()).await;

        assert_eq!(session, None);
        assert_eq!(form.borrow().error(), Some(LOGIN_FAILED));
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut form = filled_form("test@test.com", "password123").into_inner();

        assert!(form.begin_submit().is_some());
        assert!(form.is_loading());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn new_submit_clears_previous_error() {
        let mut form = filled_form("test@test.com", "").into_inner();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some(MISSING_CREDENTIALS));

        form.set_password("password123".to_string());
        assert!(form.begin_submit().is_some());
        assert_eq!(form.error(), None);
    }
}
