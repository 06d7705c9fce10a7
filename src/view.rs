// src/view.rs
//
// The interactive view pipeline: filter → search → sort → page.
//
// Everything here is a pure function of the canonical table plus view
// state, recomputed wholesale on every change. Row identity is the table
// index; nothing below this line clones row data until display time.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::columns::ColumnDef;
use crate::core::{dates, num};
use crate::table::{Record, Table};

/* ---------------- View state ---------------- */

/// Active facet selections: column key to required value. An entry means
/// "exactly this value"; absence means no constraint.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    selected: HashMap<String, String>,
}

impl FilterState {
    /// Select a value. The empty value clears the constraint, matching
    /// the "All" entry of a dropdown.
    pub fn set(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.selected.remove(key);
        } else {
            self.selected.insert(s!(key), s!(value));
        }
    }

    pub fn clear(&mut self, key: &str) {
        self.selected.remove(key);
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self, key: &str) -> Option<&str> {
        self.selected.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Exact, case-sensitive match on every constrained key. A key the
    /// record does not have fails the record.
    fn passes(&self, record: &Record<'_>) -> bool {
        self.selected
            .iter()
            .all(|(key, want)| record.get(key) == Some(want.as_str()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn flip(self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Single-column sort order.
#[derive(Clone, Debug, PartialEq)]
pub struct SortSpec {
    pub key: String,
    pub dir: SortDir,
}

/* ---------------- Filter + search ---------------- */

/// Row indices that survive the facet filters and the search term, in
/// table order. Both stages always run against the full table, never
/// against a previous result.
pub fn matching_rows(table: &Table, filters: &FilterState, search: &str) -> Vec<usize> {
    let term = search.to_lowercase();
    let mut ix = Vec::new();
    for (i, rec) in table.records().enumerate() {
        if !filters.passes(&rec) {
            continue;
        }
        if !term.is_empty() && !record_matches(&rec, &term) {
            continue;
        }
        ix.push(i);
    }
    ix
}

/// Substring match against any field, case-insensitive.
fn record_matches(record: &Record<'_>, lower_term: &str) -> bool {
    record
        .fields()
        .iter()
        .any(|v| v.to_lowercase().contains(lower_term))
}

/* ---------------- Sort ---------------- */

/// Sort a matching set by one column, type-aware. Ties keep table order.
/// An unknown sort key leaves the set untouched.
pub fn sort_rows(table: &Table, columns: &[ColumnDef], ix: &mut [usize], spec: &SortSpec) {
    let Some(col) = columns.iter().find(|c| c.key == spec.key) else {
        return;
    };
    let key = col.key.as_str();

    if col.is_date {
        // Unreadable dates sink to the end whatever the direction.
        ix.sort_by(|&a, &b| {
            let da = cell(table, a, key).and_then(dates::parse_date);
            let db = cell(table, b, key).and_then(dates::parse_date);
            match (da, db) {
                (Some(ta), Some(tb)) => directed(ta.cmp(&tb), spec.dir),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    } else if col.is_numeric {
        ix.sort_by(|&a, &b| {
            let na = cell(table, a, key).map_or(0.0, num::coerced_number);
            let nb = cell(table, b, key).map_or(0.0, num::coerced_number);
            directed(na.partial_cmp(&nb).unwrap_or(Ordering::Equal), spec.dir)
        });
    } else {
        ix.sort_by(|&a, &b| {
            let va = cell(table, a, key).unwrap_or("");
            let vb = cell(table, b, key).unwrap_or("");
            directed(va.cmp(vb), spec.dir)
        });
    }
}

fn cell<'a>(table: &'a Table, row: usize, key: &str) -> Option<&'a str> {
    table.record(row).and_then(|r| r.get(key))
}

fn directed(ord: Ordering, dir: SortDir) -> Ordering {
    match dir {
        SortDir::Asc => ord,
        SortDir::Desc => ord.reverse(),
    }
}

/* ---------------- Paging ---------------- */

/// The slice of a matching set visible on one 1-based page.
pub fn page_window(ix: &[usize], page: usize, page_size: usize) -> &[usize] {
    let size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(size).min(ix.len());
    let end = start.saturating_add(size).min(ix.len());
    &ix[start..end]
}

/// Total pages for a matching set; an empty set has zero.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/* ---------------- Display ---------------- */

/// A cell as the user sees it. Currency columns get money formatting;
/// everything else passes through untouched. Sorting and filtering never
/// see this form.
pub fn display_value(column: &ColumnDef, raw: &str) -> String {
    if column.is_currency() {
        if let Some(n) = num::plain_number(raw) {
            return num::format_rupees(n);
        }
    }
    s!(raw)
}

/// Materialize rows in display form, one cell per column in sheet order.
pub fn display_rows(table: &Table, columns: &[ColumnDef], ix: &[usize]) -> Vec<Vec<String>> {
    ix.iter()
        .filter_map(|&row| table.record(row))
        .map(|rec| {
            columns
                .iter()
                .map(|col| display_value(col, rec.get(&col.key).unwrap_or("")))
                .collect()
        })
        .collect()
}
