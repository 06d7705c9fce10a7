// src/facets.rs
//! Facet selection: which columns earn a discrete filter dropdown.
//!
//! Composition is fixed: pinned-start columns, then auto-picked
//! categorical columns in sheet order, then pinned-end columns. Pinned
//! columns always survive; auto picks only fill whatever room the cap
//! leaves over.

use std::collections::HashSet;

use crate::columns::ColumnDef;
use crate::config::consts::{FACET_DISTINCT_CEILING, MAX_FACETS};
use crate::config::reports::{FacetRules, ReportId};
use crate::table::Table;

/// Pick the facet columns for one report, as header keys in strip order.
pub fn select_facets(table: &Table, columns: &[ColumnDef], report: ReportId) -> Vec<String> {
    let rules = report.facet_rules();

    let pinned_start: Vec<&ColumnDef> = columns
        .iter()
        .filter(|c| matches_any(c, rules.pin_start))
        .collect();
    let pinned_end: Vec<&ColumnDef> = columns
        .iter()
        .filter(|c| matches_any(c, rules.pin_end))
        .collect();

    let room = MAX_FACETS.saturating_sub(pinned_start.len() + pinned_end.len());
    let auto = auto_candidates(table, columns, &rules).into_iter().take(room);

    pinned_start
        .into_iter()
        .chain(auto)
        .chain(pinned_end)
        .map(|c| c.key.clone())
        .collect()
}

/// Columns eligible for auto-selection, in sheet order: not pinned, not
/// excluded, not an amount-style numeric column, and categorical in the
/// "few distinct values" sense. Distinct counts include empty strings;
/// the dropdown values themselves do not.
fn auto_candidates<'a>(
    table: &Table,
    columns: &'a [ColumnDef],
    rules: &FacetRules,
) -> Vec<&'a ColumnDef> {
    columns
        .iter()
        .filter(|c| !matches_any(c, rules.pin_start) && !matches_any(c, rules.pin_end))
        .filter(|c| !matches_any(c, rules.exclude))
        .filter(|c| !(c.is_numeric && c.label.to_lowercase().contains("amount")))
        .filter(|c| {
            let distinct = distinct_count(table, &c.key);
            distinct > 0 && distinct < FACET_DISTINCT_CEILING
        })
        .collect()
}

fn matches_any(column: &ColumnDef, names: &[&str]) -> bool {
    names
        .iter()
        .any(|n| column.key.eq_ignore_ascii_case(n) || column.label.eq_ignore_ascii_case(n))
}

fn distinct_count(table: &Table, key: &str) -> usize {
    let mut seen = HashSet::new();
    for rec in table.records() {
        if let Some(v) = rec.get(key) {
            seen.insert(v);
        }
    }
    seen.len()
}

/// Values for one facet's dropdown: distinct, non-empty, first-seen order.
pub fn facet_values(table: &Table, key: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for rec in table.records() {
        if let Some(v) = rec.get(key) {
            if !v.is_empty() && seen.insert(v) {
                values.push(s!(v));
            }
        }
    }
    values
}
