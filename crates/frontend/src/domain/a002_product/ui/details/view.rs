use super::view_model::ProductDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_uom::Uom;
use contracts::domain::a002_product::Product;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    /// Product being edited; `None` for a new one.
    existing: Option<Product>,
    #[prop(into)]
    uoms: Signal<Vec<Uom>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(existing.as_ref());
    vm.load_if_needed();

    view! {
        <ModalFrame
            id="product-modal"
            title=vm.title()
            on_close=on_cancel
            modal_class="product-modal"
        >
            <form
                id="product-form"
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <div class="form-group">
                    <label for="product-name">"Product Name"</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-price">"Price per Unit"</label>
                    <input
                        type="number"
                        id="product-price"
                        min="0"
                        step="0.01"
                        prop:value=move || vm.form.get().price
                        on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-uom">"Unit of Measure"</label>
                    <select
                        id="product-uom"
                        prop:value=move || vm.form.get().uom_id
                        on:change=move |ev| vm.form.update(|f| f.uom_id = event_target_value(&ev))
                    >
                        <option value="">"Select UOM"</option>
                        {move || uoms.get().into_iter().map(|uom| {
                            let value = uom.id.as_string();
                            let selected = vm.form.with_untracked(|f| f.uom_id == value);
                            view! { <option value=value selected=selected>{uom.name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="details-actions">
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.submitting.get())
                    >
                        {icon("save")}
                        {move || format!(" {}", vm.save_label())}
                    </Button>
                    <Button
                        button_type=ButtonType::Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                </div>
            </form>
        </ModalFrame>
    }
}
