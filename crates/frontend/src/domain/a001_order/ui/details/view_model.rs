use super::model;
use contracts::domain::a001_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::error::ApiError;

/// ViewModel of the order details page
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub order: RwSignal<Option<Order>>,
    pub loading: RwSignal<bool>,
    /// Status update in flight
    pub updating: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl OrderDetailsViewModel {
    pub fn new() -> Self {
        Self {
            order: RwSignal::new(None),
            loading: RwSignal::new(false),
            updating: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, id: String) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(order) => this.order.set(Some(order)),
                Err(e) => {
                    log::error!("Failed to load order {}: {}", id, e);
                    this.error.set(Some(format!("Erreur de chargement : {}", e)));
                }
            }
            this.loading.set(false);
        });
    }

    /// Persist the new status, then reload the order from the server.
    ///
    /// On failure the order is put back as it was before the request.
    pub fn change_status(&self, status: OrderStatus) {
        let snapshot = self.order.get_untracked();
        let Some(id) = snapshot.as_ref().map(|o| o.commande_id.clone()) else {
            return;
        };
        let this = *self;
        this.updating.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::update_status(&id, status).await {
                Ok(()) => {
                    log::info!("Order {} status set to {}", id, status.code());
                    this.updating.set(false);
                    this.load(id);
                }
                Err(e) => {
                    log::error!("Failed to update status of order {}: {}", id, e);
                    this.status_update_failed(snapshot, &e);
                }
            }
        });
    }

    /// Restore `snapshot` so the status control shows the persisted value again
    fn status_update_failed(&self, snapshot: Option<Order>, error: &ApiError) {
        self.error.set(Some(format!("Erreur de mise à jour du statut : {}", error)));
        self.order.set(snapshot);
        self.updating.set(false);
    }
}

impl Default for OrderDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_status_update_restores_order() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = OrderDetailsViewModel::new();
            let order = Order::new("CMD-42");
            vm.order.set(Some(order.clone()));
            vm.updating.set(true);

            vm.status_update_failed(Some(order.clone()), &ApiError::Http { status: 500, message: None });

            assert_eq!(vm.order.get_untracked(), Some(order));
            assert!(!vm.updating.get_untracked());
            assert!(vm
                .error
                .get_untracked()
                .is_some_and(|msg| msg.starts_with("Erreur de mise à jour du statut")));
        });
    }
}
