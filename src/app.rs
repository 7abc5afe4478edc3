use crate::components::AppShell;
use crate::features::auth::state::{use_auth, AuthProvider};
use crate::routes::{LoginPage, UserManagementPage};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppShell>
                <ActiveView />
            </AppShell>
        </AuthProvider>
    }
}

/// The record manager is only mounted while a session exists.
#[component]
fn ActiveView() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated.get()
            fallback=|| view! { <LoginPage /> }
        >
            <UserManagementPage />
        </Show>
    }
}
