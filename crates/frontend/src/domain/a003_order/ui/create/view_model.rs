use crate::domain::a003_order::api;
use crate::shared::notify::{use_notifications, NotificationService};
use contracts::domain::a002_product::{Product, ProductId};
use contracts::domain::a003_order::{submit_with, DraftOrder, LineId};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Owned by the orders page, so the draft survives a failed submit and
/// outlives the modal's own reactive scope.
#[derive(Clone, Copy)]
pub struct CreateOrderViewModel {
    pub draft: RwSignal<DraftOrder>,
    pub submitting: RwSignal<bool>,
    notifications: NotificationService,
}

impl CreateOrderViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(DraftOrder::new()),
            submitting: RwSignal::new(false),
            notifications: use_notifications(),
        }
    }

    /// Fresh draft with one blank line, as the modal opens.
    pub fn reset(&self) {
        self.draft.set(DraftOrder::with_blank_line());
        self.submitting.set(false);
    }

    pub fn set_customer_name(&self, name: String) {
        self.draft.update(|d| d.customer_name = name);
    }

    pub fn add_item(&self) {
        self.draft.update(|d| {
            d.add_item();
        });
    }

    pub fn remove_item(&self, id: LineId) {
        self.draft.update(|d| {
            d.remove_item(id);
        });
    }

    /// `raw` is the `<select>` value; empty or unknown clears the product.
    pub fn select_product(&self, id: LineId, raw: &str, products: &[Product]) {
        let product = ProductId::from_string(raw)
            .ok()
            .and_then(|pid| products.iter().find(|p| p.id == pid));
        self.draft.update(|d| {
            d.set_product(id, product);
        });
    }

    pub fn set_quantity(&self, id: LineId, raw: &str) {
        self.draft.update(|d| {
            d.set_quantity(id, raw);
        });
    }

    /// Validate and create the order.
    ///
    /// Validation failures never reach the network. On a failed request the
    /// draft is left exactly as it was so the user can retry.
    pub fn submit_command(&self, on_created: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        let notifications = self.notifications;
        let draft = self.draft.get_untracked();

        let submitting = self.submitting;
        submitting.set(true);
        spawn_local(async move {
            let result = submit_with(&draft, |dto| async move { api::create(&dto).await }).await;
            let _ = submitting.try_set(false);
            match result {
                Ok(created) => {
                    log::info!(
                        "Order {} created with {} item(s)",
                        created.id,
                        created.items
                    );
                    notifications.success("Order created successfully!");
                    on_created.run(());
                }
                Err(e) => notifications.error(e.to_string()),
            }
        });
    }
}

impl Default for CreateOrderViewModel {
    fn default() -> Self {
        Self::new()
    }
}
