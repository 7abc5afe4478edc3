use leptos::prelude::*;

/// Inline busy indicator. `label` is announced to screen readers only.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Cargando".to_string());

    view! {
        <span
            class="inline-block h-5 w-5 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
            role="status"
            aria-live="polite"
            aria-label=label
        ></span>
    }
}
