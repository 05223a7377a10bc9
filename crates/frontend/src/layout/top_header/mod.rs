//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - Navigation links (catalogue for admins)
//! - User info and logout

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let is_admin = move || auth_state.with(|s| s.is_admin());
    let is_authenticated = move || auth_state.with(|s| s.is_authenticated());

    let logout = move |_| do_logout(set_auth_state);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Administration des commandes"</span>
            </div>

            <nav class="top-header__nav">
                <Show when=is_admin>
                    <A href="/admin/catalogue" attr:class="top-header__link">
                        {icon("products")}
                        <span>"Catalogue"</span>
                    </A>
                </Show>
            </nav>

            <Show when=is_authenticated>
                <div class="top-header__actions">
                    <div class="top-header__user">
                        <span>
                            {move || auth_state.get().user_info
                                .map(|u| u.display_name().to_string())
                                .unwrap_or_default()}
                        </span>
                    </div>

                    <button class="top-header__icon-btn" on:click=logout title="Déconnexion">
                        {icon("logout")}
                    </button>
                </div>
            </Show>
        </div>
    }
}
