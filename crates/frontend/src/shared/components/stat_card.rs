use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard tile: icon, label and one already-formatted value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Formatted value; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    /// BEM modifier, e.g. `"revenue"` -> `stat-card--revenue`
    #[prop(optional, into)]
    variant: String,
) -> impl IntoView {
    let class = if variant.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{variant}")
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "\u{2014}".to_string())}
                </div>
            </div>
        </div>
    }
}
