//! Question Table State
//!
//! Filter normalisation, pagination rules, selection pruning and request
//! sequencing for the question list. Pure logic; the reactive wrapper lives
//! in `store.rs`.

use std::collections::{BTreeMap, HashSet};

use crate::dimension::Dimension;
use crate::models::Question;

pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 20, 50];

/// Normalised column filters; empty string means "no filter"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    pub category: String,
    pub difficulty: String,
    pub question_type: String,
}

impl TableFilter {
    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Category => &self.category,
            Dimension::Difficulty => &self.difficulty,
            Dimension::Type => &self.question_type,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.difficulty.is_empty() && self.question_type.is_empty()
    }
}

/// Column key -> selected values, as emitted by column filter widgets.
/// A missing key or an empty list means the column is unfiltered.
pub type RawTableFilter = BTreeMap<String, Vec<String>>;

pub fn pick_first_filter_value(values: Option<&Vec<String>>) -> String {
    values
        .and_then(|v| v.first())
        .cloned()
        .unwrap_or_default()
}

pub fn normalize_filters(raw: &RawTableFilter) -> TableFilter {
    TableFilter {
        category: pick_first_filter_value(raw.get(Dimension::Category.key())),
        difficulty: pick_first_filter_value(raw.get(Dimension::Difficulty.key())),
        question_type: pick_first_filter_value(raw.get(Dimension::Type.key())),
    }
}

/// Raw filter map reflecting `filter` with one column replaced
pub fn raw_with_column(filter: &TableFilter, dimension: Dimension, value: &str) -> RawTableFilter {
    Dimension::ALL
        .iter()
        .map(|&d| {
            let current = if d == dimension { value } else { filter.get(d) };
            let values = if current.is_empty() { Vec::new() } else { vec![current.to_string()] };
            (d.key().to_string(), values)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub current: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Outcome of a column filter change: `None` when nothing changed.
/// A real change resets to the first page and keeps the page size.
pub fn apply_filter_change(
    current: &TableFilter,
    pagination: Pagination,
    raw: &RawTableFilter,
) -> Option<(TableFilter, Pagination)> {
    let normalized = normalize_filters(raw);
    if normalized == *current {
        return None;
    }
    Some((
        normalized,
        Pagination {
            current: 1,
            ..pagination
        },
    ))
}

/// `None` when both page and size are unchanged
pub fn apply_page_change(pagination: Pagination, page: u32, page_size: u32) -> Option<Pagination> {
    if pagination.current == page && pagination.page_size == page_size {
        return None;
    }
    Some(Pagination {
        current: page,
        page_size,
    })
}

/// Size changes always land on page 1; `None` when already there with that size
pub fn apply_page_size_change(pagination: Pagination, page_size: u32) -> Option<Pagination> {
    if pagination.page_size == page_size && pagination.current == 1 {
        return None;
    }
    Some(Pagination {
        current: 1,
        page_size,
    })
}

pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Parse a quick-jumper entry, clamped to the valid page range
pub fn parse_jump_target(input: &str, total: u64, page_size: u32) -> Option<u32> {
    let page = input.trim().parse::<u64>().ok()?;
    let last = u64::from(page_count(total, page_size));
    u32::try_from(page.clamp(1, last)).ok()
}

/// Query string pairs for `GET /question/questions`; unset filters are sent empty
pub fn list_query_params(pagination: Pagination, filter: &TableFilter) -> Vec<(&'static str, String)> {
    vec![
        ("page", pagination.current.to_string()),
        ("page_size", pagination.page_size.to_string()),
        ("category", filter.category.clone()),
        ("difficulty", filter.difficulty.clone()),
        ("type", filter.question_type.clone()),
    ]
}

/// Keep only selected ids that are present in `rows`, preserving order
pub fn prune_selection(selected: &[String], rows: &[Question]) -> Vec<String> {
    let valid: HashSet<&str> = rows.iter().map(|q| q.id.as_str()).collect();
    selected
        .iter()
        .filter(|id| valid.contains(id.as_str()))
        .cloned()
        .collect()
}

/// Rows whose id is selected, in table order
pub fn selected_rows(selected: &[String], rows: &[Question]) -> Vec<Question> {
    let wanted: HashSet<&str> = selected.iter().map(String::as_str).collect();
    rows.iter()
        .filter(|q| wanted.contains(q.id.as_str()))
        .cloned()
        .collect()
}

pub fn toggle_selection(selected: &mut Vec<String>, id: &str) {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id.to_string());
    }
}

/// Select every row of the page, or clear when all are already selected
pub fn toggle_select_all(selected: &[String], rows: &[Question]) -> Vec<String> {
    let all_selected = !rows.is_empty() && rows.iter().all(|q| selected.contains(&q.id));
    if all_selected {
        Vec::new()
    } else {
        rows.iter().map(|q| q.id.clone()).collect()
    }
}

/// Monotonic request counter: only the latest issued ticket is current
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// `questions-2024-05-01T10-20-30.000Z.json` from an ISO timestamp
pub fn export_file_name(iso_timestamp: &str) -> String {
    format!("questions-{}.json", iso_timestamp.replace(':', "-"))
}
