use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Runtime settings are read once at startup and shared via context.
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
