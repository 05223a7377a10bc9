use crate::domain::a001_order::ui::details::OrderDetailsPage;
use crate::domain::a002_catalogue_item::ui::list::CataloguePage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::{RequireAdmin, RequireAuth};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page introuvable"</h1>
            <a href="/admin/catalogue">"Retour au catalogue"</a>
        </div>
    }
}

/// Login form, or back to the start page once signed in
#[component]
fn LoginRoute() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <Redirect path="/" />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/admin/catalogue" /> } />
                    <Route path=path!("/login") view=LoginRoute />
                    <Route
                        path=path!("/admin/catalogue")
                        view=|| view! { <RequireAdmin><CataloguePage /></RequireAdmin> }
                    />
                    <Route
                        path=path!("/commandes/:id")
                        view=|| view! { <RequireAuth><OrderDetailsPage /></RequireAuth> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
