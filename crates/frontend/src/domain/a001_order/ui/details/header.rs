use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::title::TitlePolicy;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

use super::status_section::OrderStatusSection;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;

/// Back button, order title and status section
///
/// `on_status_change` is handed to the status section untouched; the host
/// page decides what a status change means.
#[component]
pub fn OrderDetailsHeader(
    order: Order,
    is_admin: bool,
    is_mobile: bool,
    on_navigate_back: Callback<()>,
    on_status_change: Callback<OrderStatus>,
    /// Title rules; the configured policy when omitted
    #[prop(optional)]
    title_policy: Option<TitlePolicy>,
    #[prop(optional, into)]
    status_disabled: MaybeProp<bool>,
) -> impl IntoView {
    let policy = title_policy.unwrap_or_else(|| use_app_config().orders.title);
    let title = order.display_title(&policy);

    let layout_class = if is_mobile {
        "order-header order-header--mobile"
    } else {
        "order-header order-header--desktop"
    };
    let title_class = if is_mobile {
        "order-header__title order-header__title--sm"
    } else {
        "order-header__title order-header__title--lg"
    };

    view! {
        <div class="order-header__nav">
            <button
                class="button button--secondary"
                on:click=move |_| on_navigate_back.run(())
            >
                {icon("chevron-left")}
                "Retour"
            </button>
        </div>
        <div class=layout_class>
            <h2 class=title_class>{title}</h2>
            <OrderStatusSection
                status=order.termine
                is_admin=is_admin
                on_status_change=on_status_change
                disabled=status_disabled
            />
        </div>
    }
}
