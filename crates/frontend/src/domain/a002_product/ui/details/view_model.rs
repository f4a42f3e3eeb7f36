use crate::domain::a002_product::api;
use crate::shared::notify::{use_notifications, NotificationService};
use contracts::domain::a002_product::{Product, ProductForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the product modal
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub submitting: RwSignal<bool>,
    notifications: NotificationService,
}

impl ProductDetailsViewModel {
    /// `existing` prefills the form for editing; `None` opens a blank form.
    pub fn new(existing: Option<&Product>) -> Self {
        let form = existing.map(ProductForm::from_product).unwrap_or_default();
        Self {
            form: RwSignal::new(form),
            submitting: RwSignal::new(false),
            notifications: use_notifications(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.is_edit_mode())
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Edit Product"
        } else {
            "Add Product"
        }
    }

    pub fn save_label(&self) -> &'static str {
        if self.is_edit_mode() {
            "Update Product"
        } else {
            "Save Product"
        }
    }

    /// Refresh an edit form from the server.
    ///
    /// The fetched values replace the form only while the user has not
    /// typed anything yet.
    pub fn load_if_needed(&self) {
        let seed = self.form.get_untracked();
        let Some(id) = seed.id else {
            return;
        };
        let form = self.form;
        spawn_local(async move {
            match api::get_by_id(id).await {
                Ok(product) => {
                    let untouched = form.try_with_untracked(|f| *f == seed).unwrap_or(false);
                    if untouched {
                        form.set(ProductForm::from_product(&product));
                    }
                }
                Err(e) => log::warn!("Failed to refresh product {}: {}", id, e),
            }
        });
    }

    /// Validate and create or update; `on_saved` runs after success.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        let notifications = self.notifications;
        let current = self.form.get_untracked();

        let dto = match current.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                notifications.error(e.to_string());
                return;
            }
        };

        let submitting = self.submitting;
        submitting.set(true);
        spawn_local(async move {
            let (result, verb) = match current.id {
                Some(id) => (api::update(id, &dto).await, "updated"),
                None => (api::create(&dto).await.map(|_| ()), "created"),
            };
            let _ = submitting.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("Product {} ({})", verb, dto.name);
                    notifications.success(format!("Product {} successfully!", verb));
                    on_saved.run(());
                }
                Err(e) => notifications.error(format!("Failed to save product: {}", e)),
            }
        });
    }
}
