//! Filter Select Component
//!
//! Single-select dropdown over one question dimension. The empty option
//! clears the selection.

use leptos::prelude::*;

use crate::dimension::Dimension;

#[component]
pub fn FilterSelect(
    dimension: Dimension,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    /// Label of the empty option
    #[prop(into, default = "All".to_string())]
    placeholder: String,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            aria-label=dimension.label()
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {dimension.options().iter().map(|(option_value, label)| {
                let option_value = *option_value;
                view! {
                    <option
                        value=option_value
                        selected=move || value.with(|v| v == option_value)
                    >
                        {*label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
