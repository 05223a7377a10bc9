use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Configuration loaded before mount, read back through `use_app_config`
    provide_context(config);

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
