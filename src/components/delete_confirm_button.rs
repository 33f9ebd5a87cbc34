//! Delete Confirm Button Component
//!
//! Inline delete confirmation with Yes/Cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows the delete button initially. When clicked, shows
/// "Are you sure to delete?" with Yes/Cancel buttons.
///
/// # Arguments
/// * `disabled` - Disables the initial button (e.g. empty selection)
/// * `busy` - Shows the in-flight state and blocks re-confirmation
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <span class="delete-confirm-wrap">
            <button
                class="btn btn-danger"
                disabled=move || disabled.get() || busy.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {move || if busy.get() { "Deleting...".to_string() } else { label.clone() }}
            </button>
            <Show when=move || confirm_delete.get()>
                <span class="delete-confirm" role="dialog">
                    <span class="delete-confirm-text">"Are you sure to delete?"</span>
                    <button
                        class="btn btn-small btn-primary"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm_delete.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button
                        class="btn btn-small"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm_delete.set(false);
                        }
                    >
                        "Cancel"
                    </button>
                </span>
            </Show>
        </span>
    }
}
