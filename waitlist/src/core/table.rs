//! Waitlist table view state
//!
//! Holds the active tab, the draft and applied filter specs, the current page
//! and the row selection. Every read goes through `view`, which recomputes the
//! filtered page from the store; nothing is cached between calls.

use serde::Serialize;

use shared::{Record, RecordId, WaitlistData, WaitlistTab};

use crate::core::filter::{FilterSpec, apply_filters, count_matching};
use crate::core::paginator::{DEFAULT_PAGE_SIZE, Page, page_window, paginate, total_pages};
use crate::core::selection::Selection;

/// Row of the rendered page
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub record: Record,
    pub selected: bool,
}

/// Result of recomputing the table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistView {
    pub tab: WaitlistTab,
    pub applied: FilterSpec,
    /// Draft differs from the applied spec
    pub draft_pending: bool,
    pub page: Page<TableRow>,
    pub page_window: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    /// Header checkbox state
    pub all_selected: bool,
    pub selected_count: usize,
}

impl WaitlistView {
    pub fn ids(&self) -> Vec<&RecordId> {
        self.page.items.iter().map(|row| &row.record.id).collect()
    }
}

/// Per-session table state
#[derive(Clone, Debug)]
pub struct TableView {
    tab: WaitlistTab,
    draft: FilterSpec,
    applied: FilterSpec,
    current_page: usize,
    page_size: usize,
    selection: Selection,
}

impl TableView {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            tab: WaitlistTab::default(),
            draft: FilterSpec::default(),
            applied: FilterSpec::default(),
            current_page: 1,
            page_size,
            selection: Selection::new(),
        }
    }

    pub fn tab(&self) -> WaitlistTab {
        self.tab
    }

    pub fn draft(&self) -> &FilterSpec {
        &self.draft
    }

    pub fn applied(&self) -> &FilterSpec {
        &self.applied
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the draft; the displayed set is unchanged until `apply`
    pub fn set_draft(&mut self, spec: FilterSpec) {
        self.draft = spec;
    }

    /// Put the draft into effect
    pub fn apply(&mut self) {
        self.applied = self.draft.clone();
    }

    /// Reset draft and applied spec to the unfiltered set
    pub fn clear(&mut self) {
        self.draft = FilterSpec::default();
        self.applied = FilterSpec::default();
    }

    /// Show another record collection, starting at page 1 with nothing selected
    pub fn switch_tab(&mut self, tab: WaitlistTab) {
        if self.tab != tab {
            self.tab = tab;
            self.current_page = 1;
            self.selection.clear();
        }
    }

    /// Jump to `page`; no-op outside `[1, total_pages]`
    pub fn go_to_page(&mut self, data: &WaitlistData, page: usize) -> bool {
        let total = self.total_pages(data);
        if page == 0 || page > total {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self, data: &WaitlistData) -> bool {
        let current = self.clamped_page(data);
        self.go_to_page(data, current + 1)
    }

    pub fn previous_page(&mut self, data: &WaitlistData) -> bool {
        let current = self.clamped_page(data);
        current > 1 && self.go_to_page(data, current - 1)
    }

    pub fn toggle(&mut self, id: &RecordId) -> bool {
        self.selection.toggle(id)
    }

    /// Toggle every row of the current page
    pub fn toggle_all(&mut self, data: &WaitlistData) {
        let visible = self.visible_ids(data);
        self.selection.toggle_all(&visible);
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
    }

    /// Recompute the filtered, paginated page from the store
    ///
    /// Re-clamps the current page to 1 when the filtered set shrank below it.
    pub fn view(&mut self, data: &WaitlistData) -> WaitlistView {
        let page = self.current_records(data);
        self.current_page = page.page_number;

        let visible: Vec<RecordId> = page.items.iter().map(|record| record.id.clone()).collect();
        let all_selected = self.selection.all_selected(&visible);
        let window = page_window(page.page_number, page.total_pages);
        let has_previous = page.has_previous();
        let has_next = page.has_next();

        let selection = &self.selection;
        let page = page.map(|record| TableRow {
            selected: selection.is_selected(&record.id),
            record,
        });

        WaitlistView {
            tab: self.tab,
            applied: self.applied.clone(),
            draft_pending: self.draft != self.applied,
            page,
            page_window: window,
            has_previous,
            has_next,
            all_selected,
            selected_count: self.selection.len(),
        }
    }

    fn current_records(&self, data: &WaitlistData) -> Page<Record> {
        let filtered = apply_filters(data.records(self.tab), &self.applied);
        paginate(&filtered, self.current_page, self.page_size)
    }

    fn visible_ids(&self, data: &WaitlistData) -> Vec<RecordId> {
        self.current_records(data)
            .items
            .into_iter()
            .map(|record| record.id)
            .collect()
    }

    fn total_pages(&self, data: &WaitlistData) -> usize {
        total_pages(count_matching(data.records(self.tab), &self.applied), self.page_size)
    }

    fn clamped_page(&self, data: &WaitlistData) -> usize {
        let total = self.total_pages(data);
        if self.current_page > total && total > 0 { 1 } else { self.current_page }
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}
