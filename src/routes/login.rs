use crate::app_lib::{api::FetchTransport, config::AppConfig, theme::Theme};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::gate::{submit_login, LoginForm};
use crate::features::auth::state::use_auth;
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new(LoginForm::new());
    let loading = Signal::derive(move || form.with(LoginForm::is_loading));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let transport = FetchTransport::from_config(&AppConfig::load());
        let repository = auth.repository();
        spawn_local(async move {
            if let Some(session) = submit_login(&form, &transport, &repository).await {
                auth.set_session(session);
            }
        });
    };

    view! {
        <div class="max-w-sm mx-auto">
            <div class=Theme::CARD>
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                    "Iniciar Sesión"
                </h2>
                {move || {
                    form.with(|state| state.error().map(str::to_string))
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <form on:submit=on_submit>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="Correo">
                            "Correo"
                        </label>
                        <input
                            id="Correo"
                            name="Correo"
                            type="email"
                            class=Theme::INPUT
                            autocomplete="email"
                            required
                            prop:value=move || form.with(|state| state.email().to_string())
                            on:input=move |event| {
                                form.update(|state| state.set_email(event_target_value(&event)))
                            }
                        />
                    </div>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="Contrasena">
                            "Contraseña"
                        </label>
                        <input
                            id="Contrasena"
                            name="Contrasena"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="current-password"
                            required
                            on:input=move |event| {
                                form.update(|state| state.set_password(event_target_value(&event)))
                            }
                        />
                    </div>
                    <div class="flex items-center gap-3">
                        <Button button_type="submit" disabled=loading>
                            {move || if loading.get() { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                        </Button>
                        {move || loading.get().then_some(view! { <Spinner /> })}
                    </div>
                </form>
            </div>
        </div>
    }
}
