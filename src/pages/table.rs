//! Question table page: filtered, paginated list with bulk delete and export.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, QuestionTable, TablePagination};
use crate::dimension::Dimension;
use crate::download::download_json;
use crate::store::{
    store_begin_fetch, store_change_page, store_change_page_size, store_finish_fetch, store_reload,
    store_rows, store_set_filters, store_total, use_table_store, TableStateStoreFields,
};
use crate::table_state::{export_file_name, raw_with_column, selected_rows, toggle_select_all, toggle_selection};
use crate::toast::use_toaster;

#[component]
pub fn TablePage() -> impl IntoView {
    let store = use_table_store();
    let toaster = use_toaster();

    // Refetch whenever filters, pagination or the reload counter change
    Effect::new(move |_| {
        let filters = store.filters().get();
        let pagination = store.pagination().get();
        let version = store.reload_version().get();
        let ticket = store_begin_fetch(&store);
        log::debug!(
            "[Table] fetch #{} page={} size={} filters={:?} reload={}",
            ticket, pagination.current, pagination.page_size, filters, version
        );
        spawn_local(async move {
            let result = api::fetch_questions(pagination, &filters)
                .await
                .map_err(|e| e.to_string());
            if !store_finish_fetch(&store, ticket, result) {
                log::debug!("[Table] dropped stale response #{}", ticket);
            }
        });
    });

    let rows = Signal::derive(move || store_rows(&store));
    let has_selection = move || store.selected().with(|s| !s.is_empty());

    let on_delete = move |_: ()| {
        let ids = store.selected().get_untracked();
        if ids.is_empty() || store.deleting().get_untracked() {
            return;
        }
        store.deleting().set(true);
        spawn_local(async move {
            match api::delete_questions(&ids).await {
                Ok(()) => {
                    log::info!("[Table] deleted {} question(s)", ids.len());
                    store.selected().set(Vec::new());
                    store_reload(&store);
                    toaster.success("successfully deleted");
                }
                Err(e) => {
                    log::error!("[Table] delete failed: {}", e);
                    toaster.error(&e.to_string());
                }
            }
            store.deleting().set(false);
        });
    };

    let on_export = move |_: leptos::ev::MouseEvent| {
        let rows = selected_rows(&store.selected().get_untracked(), &store_rows(&store));
        if rows.is_empty() {
            toaster.warning("Selected rows are no longer available to export");
            store.selected().set(Vec::new());
            return;
        }
        let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
        match download_json(&rows, &export_file_name(&timestamp)) {
            Ok(()) => toaster.success(&format!("Exported {} question(s)", rows.len())),
            Err(e) => {
                log::error!("[Table] export failed: {}", e);
                toaster.error(&e.to_string());
            }
        }
    };

    view! {
        <Show
            when=move || store.error().with(Option::is_none)
            fallback=move || view! {
                <div class="error-text">
                    {move || format!("Error loading data: {}", store.error().get().unwrap_or_default())}
                </div>
            }
        >
            <div class="table-container">
                <QuestionTable
                    rows=rows
                    selected=Signal::derive(move || store.selected().get())
                    filters=Signal::derive(move || store.filters().get())
                    loading=Signal::derive(move || store.fetching().get())
                    on_toggle=move |id: String| store.selected().update(|s| toggle_selection(s, &id))
                    on_toggle_all=move |_: ()| {
                        let rows = store_rows(&store);
                        store.selected().update(|s| *s = toggle_select_all(s, &rows));
                    }
                    on_filter=move |(dimension, value): (Dimension, String)| {
                        let raw = raw_with_column(&store.filters().get_untracked(), dimension, &value);
                        store_set_filters(&store, &raw);
                    }
                />
                <div class="table-footer-bar">
                    <div class="table-footer-actions">
                        <DeleteConfirmButton
                            disabled=Signal::derive(move || !has_selection())
                            busy=Signal::derive(move || store.deleting().get())
                            on_confirm=on_delete
                        />
                        <button class="btn btn-primary" disabled=move || !has_selection() on:click=on_export>
                            "Export"
                        </button>
                    </div>
                    <TablePagination
                        total=Signal::derive(move || store_total(&store))
                        pagination=Signal::derive(move || store.pagination().get())
                        on_page=move |(page, size): (u32, u32)| store_change_page(&store, page, size)
                        on_page_size=move |size: u32| store_change_page_size(&store, size)
                    />
                </div>
            </div>
        </Show>
    }
}
