// src/session.rs
//! Per-report session state.
//!
//! Owns the canonical table for the active report plus everything derived
//! from it: inferred columns, the facet strip, and the transient view
//! state (filters, search, sort, page). Derived data is recomputed from
//! the snapshot on demand; a report switch replaces the table wholesale
//! and resets the view.
//!
//! Fetching is the caller's affair. Synchronous shells call `refresh`;
//! async shells take a ticket with `begin_fetch`, do the GET off-thread,
//! and hand the body back through `apply_csv`. A ticket issued before a
//! report switch no longer applies, which keeps a slow response for the
//! old report from flashing into the new one.

use tracing::{debug, warn};

use crate::columns::{self, ColumnDef};
use crate::config::consts::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::config::reports::{ReportDescriptor, ReportId};
use crate::facets;
use crate::fetch::SheetFetcher;
use crate::table::Table;
use crate::view::{self, FilterState, SortDir, SortSpec};

/// Ties an in-flight fetch to the session state that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    report: ReportId,
    generation: u64,
}

/// One renderable page: display-formatted rows plus the numbers the
/// pagination controls need.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub rows: Vec<Vec<String>>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
}

pub struct ReportSession {
    report: ReportId,
    generation: u64,
    table: Table,
    columns: Vec<ColumnDef>,
    facet_keys: Vec<String>,
    filters: FilterState,
    search: String,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
    // Watermark for the page-reset rule: the page snaps back to 1 when
    // the match count moves, and on page-size or search-term changes.
    last_count: usize,
}

impl ReportSession {
    pub fn new(report: ReportId) -> Self {
        Self {
            report,
            generation: 0,
            table: Table::default(),
            columns: Vec::new(),
            facet_keys: Vec::new(),
            filters: FilterState::default(),
            search: s!(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            last_count: 0,
        }
    }

    /* ---------------- Report lifecycle ---------------- */

    pub fn report(&self) -> ReportId {
        self.report
    }

    pub fn descriptor(&self) -> &'static ReportDescriptor {
        self.report.descriptor()
    }

    /// Make `report` active: drop the old table and view state, and
    /// invalidate any fetch still in flight. Page size is a user
    /// preference and survives.
    pub fn switch(&mut self, report: ReportId) {
        self.report = report;
        self.generation += 1;
        self.table = Table::default();
        self.columns.clear();
        self.facet_keys.clear();
        self.reset_view();
        debug!(report = ?report, "switched report");
    }

    /// Ticket for a fetch started against the current report and
    /// generation.
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket {
            report: self.report,
            generation: self.generation,
        }
    }

    /// Install a fetched CSV body, if its ticket is still current.
    /// Returns whether the body was applied.
    pub fn apply_csv(&mut self, ticket: FetchTicket, text: &str) -> bool {
        if ticket.generation != self.generation || ticket.report != self.report {
            debug!(report = ?ticket.report, "ignoring stale fetch response");
            return false;
        }
        self.install(Table::parse(text));
        true
    }

    /// Fetch the active report's sheet and install it, synchronously.
    /// Transport failures leave an empty table behind; the shell always
    /// has something renderable.
    pub fn refresh(&mut self, fetcher: &dyn SheetFetcher) {
        let ticket = self.begin_fetch();
        let url = self.descriptor().sheet_url();
        match fetcher.fetch_csv(&url) {
            Ok(body) => {
                self.apply_csv(ticket, &body);
            }
            Err(e) => {
                warn!(report = ?self.report, error = %e, "sheet fetch failed; table left empty");
                self.apply_csv(ticket, "");
            }
        }
    }

    fn install(&mut self, table: Table) {
        self.columns = columns::infer_columns(&table);
        self.facet_keys = facets::select_facets(&table, &self.columns, self.report);
        debug!(
            report = ?self.report,
            rows = table.len(),
            columns = self.columns.len(),
            facets = self.facet_keys.len(),
            "installed sheet"
        );
        self.table = table;
        self.sync_page();
    }

    fn reset_view(&mut self) {
        self.filters.clear_all();
        self.search.clear();
        self.sort = None;
        self.page = 1;
        self.last_count = 0;
    }

    /* ---------------- View state ---------------- */

    pub fn set_filter(&mut self, key: &str, value: &str) {
        self.filters.set(key, value);
        self.sync_page();
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.filters.clear(key);
        self.sync_page();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.sync_page();
    }

    pub fn set_search(&mut self, term: &str) {
        if self.search != term {
            self.search = s!(term);
            self.page = 1;
        }
        self.sync_page();
    }

    /// Click-a-header sort: same key flips direction, a new key starts
    /// ascending. Sorting reorders in place and never resets the page.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some(spec) if spec.key == key => Some(SortSpec {
                key: spec.key,
                dir: spec.dir.flip(),
            }),
            _ => Some(SortSpec {
                key: s!(key),
                dir: SortDir::Asc,
            }),
        };
    }

    /// Page size must be one of the fixed dropdown options; anything
    /// else is ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if !PAGE_SIZES.contains(&size) {
            return;
        }
        if self.page_size != size {
            self.page_size = size;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        let pages = view::page_count(self.matching().len(), self.page_size).max(1);
        self.page = page.clamp(1, pages);
    }

    fn sync_page(&mut self) {
        let count = self.matching().len();
        if count != self.last_count {
            self.page = 1;
            self.last_count = count;
        }
    }

    /* ---------------- Derived data ---------------- */

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn facet_keys(&self) -> &[String] {
        &self.facet_keys
    }

    /// Dropdown values for one facet, from the full table.
    pub fn facet_values(&self, key: &str) -> Vec<String> {
        facets::facet_values(&self.table, key)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The full matching set: filtered, searched, sorted row indices
    /// into the canonical table. Unpaginated; exports read this.
    pub fn matching(&self) -> Vec<usize> {
        let mut ix = view::matching_rows(&self.table, &self.filters, &self.search);
        if let Some(spec) = &self.sort {
            view::sort_rows(&self.table, &self.columns, &mut ix, spec);
        }
        ix
    }

    /// The rows the shell renders right now.
    pub fn visible(&self) -> PageView {
        let ix = self.matching();
        let window = view::page_window(&ix, self.page, self.page_size);
        PageView {
            rows: view::display_rows(&self.table, &self.columns, window),
            total: ix.len(),
            page: self.page,
            page_count: view::page_count(ix.len(), self.page_size).max(1),
            page_size: self.page_size,
        }
    }

    /// Label and display value pairs for one row of the current page,
    /// for the row-inspection panel. Out-of-range rows yield nothing.
    pub fn inspect(&self, window_row: usize) -> Vec<(String, String)> {
        let ix = self.matching();
        let window = view::page_window(&ix, self.page, self.page_size);
        let Some(&row) = window.get(window_row) else {
            return Vec::new();
        };
        let Some(rec) = self.table.record(row) else {
            return Vec::new();
        };
        self.columns
            .iter()
            .map(|c| {
                let raw = rec.get(&c.key).unwrap_or("");
                (c.label.clone(), view::display_value(c, raw))
            })
            .collect()
    }
}
