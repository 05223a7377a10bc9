use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::header::OrderDetailsHeader;
use super::view_model::OrderDetailsViewModel;
use crate::shared::responsive::use_is_mobile;
use crate::system::auth::context::use_is_admin;

fn navigate_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if history.back().is_err() {
            log::warn!("history.back() failed");
        }
    }
}

/// `/commandes/:id`
#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let vm = OrderDetailsViewModel::new();
    let is_admin = use_is_admin();
    let is_mobile = use_is_mobile();

    Effect::new(move |_| {
        if let Some(id) = params.read().get("id") {
            vm.load(id);
        }
    });

    let on_status_change = Callback::new(move |status| vm.change_status(status));
    let on_navigate_back = Callback::new(move |_| navigate_back());

    view! {
        <div class="page order-details">
            {move || vm.error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <Show when=move || vm.loading.get() && vm.order.with(|o| o.is_none())>
                <div class="page__loading">"Chargement..."</div>
            </Show>

            <div class="card">
                {move || vm.order.get().map(|order| view! {
                    <OrderDetailsHeader
                        order=order
                        is_admin=is_admin.get()
                        is_mobile=is_mobile.get()
                        on_navigate_back=on_navigate_back
                        on_status_change=on_status_change
                        status_disabled=Signal::derive(move || vm.updating.get())
                    />
                })}
            </div>
        </div>
    }
}
