use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, BadgeVariant};

/// Status requested by the admin control, if it is a real transition
pub fn status_change_request(current: OrderStatus, selected_code: &str) -> Option<OrderStatus> {
    OrderStatus::from_code(selected_code).filter(|selected| *selected != current)
}

fn badge_variant(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Completed => BadgeVariant::Success,
        OrderStatus::InProgress => BadgeVariant::Warning,
    }
}

/// Completion status badge, plus a status selector for admins
#[component]
pub fn OrderStatusSection(
    status: OrderStatus,
    is_admin: bool,
    /// Called with the new status when an admin picks a different one
    on_status_change: Callback<OrderStatus>,
    /// Disable the selector (update in flight)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="order-status">
            <Badge variant={badge_variant(status)}>
                {status.display_name()}
            </Badge>
            {is_admin.then(|| view! {
                <select
                    class="order-status__select"
                    aria-label="Statut de la commande"
                    prop:value={status.code()}
                    disabled=move || disabled.get().unwrap_or(false)
                    on:change=move |ev| {
                        if let Some(next) = status_change_request(status, &event_target_value(&ev)) {
                            on_status_change.run(next);
                        }
                    }
                >
                    {OrderStatus::all().into_iter().map(|option| view! {
                        <option value={option.code()} selected={option == status}>
                            {option.display_name()}
                        </option>
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_only_on_real_transition() {
        assert_eq!(
            status_change_request(OrderStatus::InProgress, "termine"),
            Some(OrderStatus::Completed)
        );
        assert_eq!(
            status_change_request(OrderStatus::Completed, "en_cours"),
            Some(OrderStatus::InProgress)
        );
        assert_eq!(status_change_request(OrderStatus::Completed, "termine"), None);
        assert_eq!(status_change_request(OrderStatus::InProgress, "annule"), None);
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(badge_variant(OrderStatus::Completed), BadgeVariant::Success);
        assert_eq!(badge_variant(OrderStatus::InProgress), BadgeVariant::Warning);
    }
}
