//! User management view: the create/edit form on top and the full user list
//! below. All data flows through the record manager; this file only binds it
//! to the DOM.

use crate::{
    app_lib::{api::FetchTransport, config::AppConfig, theme::Theme},
    components::{Alert, AlertKind, Button, ButtonVariant},
    features::users::{
        confirm::DeletePolicy,
        manager::{delete_user, refresh_users, save_draft, RecordManager},
        types::UserRecord,
    },
};
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};

/// Renders the management view and fetches the list on mount.
#[component]
pub fn UserManagementPage() -> impl IntoView {
    let config = AppConfig::load();
    let transport = StoredValue::new(FetchTransport::from_config(&config));
    let policy = DeletePolicy::from_config(&config);
    let manager = RwSignal::new(RecordManager::new());
    let editing = Signal::derive(move || manager.with(|state| state.draft().is_editing()));

    let initial = transport.get_value();
    spawn_local(async move { refresh_users(&manager, &initial).await });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let transport = transport.get_value();
        spawn_local(async move { save_draft(&manager, &transport).await });
    };

    view! {
        <div class="space-y-6">
            <div class=Theme::CARD>
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                    {move || if editing.get() { "Editar Usuario" } else { "Crear Nuevo Usuario" }}
                </h2>
                {move || {
                    manager
                        .with(|state| state.error().map(str::to_string))
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class=Theme::LABEL for="Nombre">"Nombre:"</label>
                        <input
                            id="Nombre"
                            name="Nombre"
                            type="text"
                            class=Theme::INPUT
                            required
                            prop:value=move || manager.with(|state| state.draft().name.clone())
                            on:input=move |event| {
                                manager.update(|state| state.set_name(event_target_value(&event)))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="Correo">"Correo:"</label>
                        <input
                            id="Correo"
                            name="Correo"
                            type="email"
                            class=Theme::INPUT
                            required
                            prop:value=move || manager.with(|state| state.draft().email.clone())
                            on:input=move |event| {
                                manager.update(|state| state.set_email(event_target_value(&event)))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="Contrasena">"Contraseña:"</label>
                        <input
                            id="Contrasena"
                            name="Contrasena"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="new-password"
                            required=move || !editing.get()
                            prop:value=move || manager.with(|state| state.draft().password().to_string())
                            on:input=move |event| {
                                manager.update(|state| state.set_password(event_target_value(&event)))
                            }
                        />
                    </div>
                    <div class="flex gap-3">
                        <Button button_type="submit">
                            {move || if editing.get() { "Actualizar" } else { "Crear" }}
                        </Button>
                        <Show when=move || editing.get()>
                            <Button
                                variant=ButtonVariant::Secondary
                                on_click=Callback::new(move |_| manager.update(RecordManager::cancel_edit))
                            >
                                "Cancelar"
                            </Button>
                        </Show>
                    </div>
                </form>
            </div>

            <div class=Theme::CARD>
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                    "Lista de Usuarios"
                </h2>
                <Show
                    when=move || manager.with(|state| !state.users().is_empty())
                    fallback=|| view! {
                        <Alert kind=AlertKind::Info message="No hay usuarios registrados".to_string() />
                    }
                >
                    <ul class="space-y-2">
                        <For
                            each=move || manager.with(|state| state.users().to_vec())
                            key=|user| user.id.clone()
                            children=move |user| {
                                view! {
                                    <UserRow
                                        user=user
                                        manager=manager
                                        transport=transport
                                        policy=policy
                                    />
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn UserRow(
    user: UserRecord,
    manager: RwSignal<RecordManager>,
    transport: StoredValue<FetchTransport>,
    policy: DeletePolicy,
) -> impl IntoView {
    let edit_target = user.clone();
    let delete_target = user.clone();

    let on_edit = Callback::new(move |_| manager.update(|state| state.start_edit(&edit_target)));
    let on_delete = Callback::new(move |_| {
        let transport = transport.get_value();
        let target = delete_target.clone();
        spawn_local(async move { delete_user(&manager, &transport, &policy, &target).await });
    });

    view! {
        <li class=Theme::LIST_ITEM_FLAT>
            <div>
                <h3 class="text-sm font-medium text-gray-900 dark:text-white">{user.name}</h3>
                <p class="text-sm text-gray-500 dark:text-gray-400">{user.email}</p>
            </div>
            <div class="flex gap-2">
                <Button variant=ButtonVariant::Secondary on_click=on_edit>
                    "Editar"
                </Button>
                <Button variant=ButtonVariant::Danger on_click=on_delete>
                    "Eliminar"
                </Button>
            </div>
        </li>
    }
}
