//! UOM grid shown under the products table, with its "Add UOM" modal.
//!
//! The panel does not load anything itself: the products page owns the UOM
//! list (the product form needs it too) and reloads it through `on_changed`.

use contracts::domain::a001_uom::{Uom, UomDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_uom::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_action;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notify::use_notifications;

const DELETE_UOM_PROMPT: &str =
    "Are you sure you want to delete this UOM? This may affect products using this UOM.";

#[component]
pub fn UomPanel(
    #[prop(into)]
    uoms: Signal<Vec<Uom>>,
    /// Called after a UOM was created or deleted.
    on_changed: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let show_modal = RwSignal::new(false);

    let delete_uom = move |uom: Uom| {
        if !confirm_action(DELETE_UOM_PROMPT) {
            return;
        }
        spawn_local(async move {
            match api::delete(uom.id).await {
                Ok(()) => {
                    log::info!("UOM {} deleted", uom.id);
                    notifications.success("UOM deleted successfully!");
                    on_changed.run(());
                }
                Err(e) => notifications.error(format!("Failed to delete UOM: {}", e)),
            }
        });
    };

    view! {
        <div class="uom-section">
            <div class="section__header">
                <h2 class="section__title">"Units of Measure"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| show_modal.set(true)
                >
                    {icon("plus")}
                    " Add UOM"
                </Button>
            </div>

            <div id="uoms-grid" class="uom-grid">
                {move || {
                    let list = uoms.get();
                    if list.is_empty() {
                        view! { <p class="no-data">"No UOMs found."</p> }.into_any()
                    } else {
                        list.into_iter().map(|uom| {
                            let name = uom.name.clone();
                            view! {
                                <div class="uom-card">
                                    {icon("uom")}
                                    <span class="uom-card__name">{name}</span>
                                    <button
                                        class="uom-card__delete"
                                        title="Delete"
                                        on:click=move |_| delete_uom(uom.clone())
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>

            <Show when=move || show_modal.get()>
                <AddUomModal
                    on_close=Callback::new(move |_| show_modal.set(false))
                    on_created=Callback::new(move |_| {
                        show_modal.set(false);
                        on_changed.run(());
                    })
                />
            </Show>
        </div>
    }
}

#[component]
fn AddUomModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let name = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let dto = match UomDto::from_input(&name.get_untracked()) {
            Ok(dto) => dto,
            Err(e) => {
                notifications.error(e.to_string());
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            let result = api::create(&dto).await;
            let _ = submitting.try_set(false);
            match result {
                Ok(id) => {
                    log::info!("UOM {} created", id);
                    notifications.success("UOM created successfully!");
                    on_created.run(());
                }
                Err(e) => notifications.error(format!("Failed to create UOM: {}", e)),
            }
        });
    };

    view! {
        <ModalFrame title="Add UOM" on_close=on_close modal_class="uom-modal">
            <form
                id="uom-form"
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <div class="form-group">
                    <label for="uom-name">"UOM Name"</label>
                    <input
                        type="text"
                        id="uom-name"
                        placeholder="e.g. kg, litre, piece"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="details-actions">
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {icon("save")}
                        " Add UOM"
                    </Button>
                    <Button
                        button_type=ButtonType::Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                </div>
            </form>
        </ModalFrame>
    }
}
