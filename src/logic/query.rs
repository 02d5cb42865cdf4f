use serde::{Deserialize, Serialize};

use crate::model::EntityRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Table,
    Card,
}

/// Ephemeral per-page query state. Never persisted; reset to defaults when a
/// page mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    /// 1-based page number.
    pub page: usize,
    pub view_mode: ViewMode,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            view_mode: ViewMode::Table,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changing the search term always returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }
}

/// Case-insensitive substring match over each record's fixed search fields.
/// An empty term matches everything. Source order is preserved; no
/// tokenization, no ranking, no whitespace normalization.
pub fn filter<'a, R: EntityRecord>(records: &'a [R], term: &str) -> Vec<&'a R> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// The slice for the given 1-based page. A page past the end yields an empty
/// slice, not an error; boundary clamping is the navigation controls' job.
pub fn paginate<'a, R>(records: &[&'a R], page_size: usize, page: usize) -> Vec<&'a R> {
    if page_size == 0 || page == 0 {
        return Vec::new();
    }
    records
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .copied()
        .collect()
}

/// Ceiling division; zero matching records means zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// What the user currently sees: the filtered, paginated projection of a
/// collection. Filtering always runs before pagination.
#[derive(Debug)]
pub struct QueryView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_matches: usize,
    pub page_count: usize,
    pub page: usize,
}

impl<'a, R: EntityRecord> QueryView<'a, R> {
    pub fn derive(records: &'a [R], state: &QueryState, page_size: usize) -> Self {
        let matches = filter(records, &state.search);
        let total_matches = matches.len();
        let page_count = page_count(total_matches, page_size);
        let rows = paginate(&matches, page_size, state.page);
        Self {
            rows,
            total_matches,
            page_count,
            page: state.page,
        }
    }

    /// True when the current filter matches nothing; the presentation layer
    /// renders an explicit "no records" state instead of an empty table.
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}
