//! Question Table Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Question, QuestionPage};
use crate::table_state::{
    apply_filter_change, apply_page_change, apply_page_size_change, prune_selection, Pagination,
    RawTableFilter, RequestSeq, TableFilter,
};

/// Question table state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TableState {
    /// Active column filters
    pub filters: TableFilter,
    pub pagination: Pagination,
    /// Selected question ids
    pub selected: Vec<String>,
    /// Last successfully loaded page (kept while the next one loads)
    pub page: Option<QuestionPage>,
    pub fetching: bool,
    pub deleting: bool,
    /// Message of the last failed list fetch
    pub error: Option<String>,
    /// Bumped to force a refetch with unchanged parameters
    pub reload_version: u32,
    pub request_seq: RequestSeq,
}

/// Type alias for the store
pub type TableStore = Store<TableState>;

/// Get the table store from context
pub fn use_table_store() -> TableStore {
    expect_context::<TableStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a column filter change (resets to page 1 when filters really change)
pub fn store_set_filters(store: &TableStore, raw: &RawTableFilter) {
    let current = store.filters().get_untracked();
    let pagination = store.pagination().get_untracked();
    if let Some((filters, pagination)) = apply_filter_change(&current, pagination, raw) {
        store.filters().set(filters);
        store.pagination().set(pagination);
    }
}

pub fn store_change_page(store: &TableStore, page: u32, page_size: u32) {
    if let Some(next) = apply_page_change(store.pagination().get_untracked(), page, page_size) {
        store.pagination().set(next);
    }
}

pub fn store_change_page_size(store: &TableStore, page_size: u32) {
    if let Some(next) = apply_page_size_change(store.pagination().get_untracked(), page_size) {
        store.pagination().set(next);
    }
}

/// Issue a new request ticket and mark the table as fetching
pub fn store_begin_fetch(store: &TableStore) -> u64 {
    let ticket = store.request_seq().write().issue();
    store.fetching().set(true);
    ticket
}

/// Install a fetched page if `ticket` is still the latest request.
/// Returns false when the response is stale and was dropped.
pub fn store_finish_fetch(store: &TableStore, ticket: u64, result: Result<QuestionPage, String>) -> bool {
    if !store.request_seq().get_untracked().is_current(ticket) {
        return false;
    }
    match result {
        Ok(page) => {
            let pruned = prune_selection(&store.selected().get_untracked(), &page.list);
            store.selected().set(pruned);
            store.page().set(Some(page));
            store.error().set(None);
        }
        Err(message) => store.error().set(Some(message)),
    }
    store.fetching().set(false);
    true
}

/// Force a refetch of the current page
pub fn store_reload(store: &TableStore) {
    store.reload_version().update(|v| *v += 1);
}

/// Rows of the currently displayed page
pub fn store_rows(store: &TableStore) -> Vec<Question> {
    store
        .page()
        .with(|page| page.as_ref().map(|p| p.list.clone()).unwrap_or_default())
}

pub fn store_total(store: &TableStore) -> u64 {
    store.page().with(|page| page.as_ref().map_or(0, |p| p.total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_question;

    fn page(ids: &[&str]) -> QuestionPage {
        QuestionPage {
            list: ids
                .iter()
                .map(|id| sample_question(id, "inference", "easy", "singleChoice"))
                .collect(),
            total: ids.len() as u64,
            current_page: 1,
        }
    }

    #[test]
    fn test_finish_fetch_latest_ticket_wins() {
        let owner = Owner::new();
        owner.set();
        let store: TableStore = Store::new(TableState::default());
        store.selected().set(vec!["a".to_string(), "b".to_string(), "gone".to_string()]);
        store.error().set(Some("earlier failure".to_string()));

        let stale = store_begin_fetch(&store);
        let current = store_begin_fetch(&store);
        assert!(store.fetching().get_untracked());

        // Newer request resolves first
        assert!(store_finish_fetch(&store, current, Ok(page(&["a", "b"]))));
        assert_eq!(store.selected().get_untracked(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.error().get_untracked(), None);
        assert!(!store.fetching().get_untracked());

        // The older response arrives late and is ignored
        assert!(!store_finish_fetch(&store, stale, Ok(page(&["z"]))));
        assert_eq!(store_total(&store), 2);
        assert_eq!(store_rows(&store)[0].id, "a");
    }

    #[test]
    fn test_finish_fetch_error_keeps_previous_page() {
        let owner = Owner::new();
        owner.set();
        let store: TableStore = Store::new(TableState::default());

        let first = store_begin_fetch(&store);
        store_finish_fetch(&store, first, Ok(page(&["a"])));
        let second = store_begin_fetch(&store);
        assert!(store_finish_fetch(&store, second, Err("Network error: offline".to_string())));

        assert_eq!(store.error().get_untracked().as_deref(), Some("Network error: offline"));
        assert_eq!(store_total(&store), 1);
    }
}
