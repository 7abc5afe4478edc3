//! Shared layout wrapper with the app header, the signed-in banner and the
//! content container. Access control is UX-only here; the backend must still
//! enforce it.

use crate::{
    app_lib::build_info,
    components::{Button, ButtonVariant},
    features::auth::state::use_auth,
};
use leptos::prelude::*;

/// Wraps the active view with a header and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let display_name = auth.display_name();

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <h1 class="text-xl font-semibold whitespace-nowrap dark:text-white">
                        "Gestión de Usuarios"
                    </h1>
                    <Show when=move || is_authenticated.get()>
                        <div class="flex items-center gap-4">
                            <span class="text-sm text-gray-700 dark:text-gray-300">
                                {move || format!("Bienvenido, {}", display_name.get())}
                            </span>
                            <Button
                                variant=ButtonVariant::Secondary
                                on_click=Callback::new(move |_| auth.logout())
                            >
                                "Cerrar Sesión"
                            </Button>
                        </div>
                    </Show>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
