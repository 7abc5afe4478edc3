//! Auth session context for the frontend. The provider restores the persisted
//! session synchronously on mount, so the first render already shows the right
//! view, and exposes derived auth signals to the rest of the tree. Only signals
//! live in the context; storage handles are reopened on demand because they
//! are not thread-safe.

use crate::{
    app_lib::storage::SessionStore,
    features::auth::session::{end_session, restore_session, Session, StorageSessionRepository},
};
use leptos::prelude::*;

pub type BrowserSessionRepository = StorageSessionRepository<SessionStore>;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around `repository`, restoring whatever it holds.
    fn new(repository: BrowserSessionRepository) -> Self {
        let session = RwSignal::new(restore_session(&repository));
        let is_authenticated = Signal::derive(move || session.with(Option::is_some));
        Self {
            session,
            is_authenticated,
        }
    }

    /// Handle to the persisted mirror of the session.
    pub fn repository(&self) -> BrowserSessionRepository {
        open_repository()
    }

    /// Updates the in-memory session after login.
    pub fn set_session(&self, session: Session) {
        self.session.set(Some(session));
    }

    /// Wipes the persisted slots and the in-memory session.
    pub fn logout(&self) {
        end_session(&self.repository());
        self.session.set(None);
    }

    pub fn display_name(&self) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || {
            session.with(|session| {
                session
                    .as_ref()
                    .map(|session| session.display_name().to_string())
                    .unwrap_or_default()
            })
        })
    }
}

fn open_repository() -> BrowserSessionRepository {
    StorageSessionRepository::new(SessionStore::open())
}

/// Provides auth context and restores the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(open_repository());
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a freshly restored one.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(open_repository()))
}
