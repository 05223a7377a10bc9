use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renders children for authenticated users, the login page otherwise
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let children = StoredValue::new(children);

    view! {
        <Show
            when=move || !auth_state.with(|s| s.restoring)
            fallback=|| view! { <div class="page__loading">"Chargement de la session..."</div> }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                {children.get_value()()}
            </Show>
        </Show>
    }
}

/// Renders children for admins only
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let children = StoredValue::new(children);

    view! {
        <RequireAuth>
            <Show
                when=move || auth_state.with(|s| s.is_admin())
                fallback=|| view! { <div class="alert alert--error">"Accès refusé : droits administrateur requis."</div> }
            >
                {children.get_value()()}
            </Show>
        </RequireAuth>
    }
}
