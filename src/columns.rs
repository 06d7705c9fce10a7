// src/columns.rs
//! Column typing: date, numeric or plain text, judged from one sample.

use crate::config::consts::{CURRENCY_HINTS, DATE_NAME_HINTS, SAMPLE_DEPTH};
use crate::core::{dates, num, text};
use crate::table::Table;

/// Everything the shell needs to know about one column.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    pub is_date: bool,
    pub is_numeric: bool,
}

impl ColumnDef {
    /// Currency columns get money formatting at display time only; the
    /// stored value stays as the sheet wrote it.
    pub fn is_currency(&self) -> bool {
        if !self.is_numeric {
            return false;
        }
        let label = self.label.to_lowercase();
        CURRENCY_HINTS.iter().any(|hint| label.contains(hint))
    }
}

/// Derive one `ColumnDef` per header key, in sheet order.
///
/// The type comes from a single sample: the first non-empty value in the
/// first `SAMPLE_DEPTH` rows. Columns whose *name* already says date or
/// time are dated regardless of content. Sheets routinely hold dates the
/// heuristic cannot read, and sorting those as text is worse than
/// trusting the author's naming.
pub fn infer_columns(table: &Table) -> Vec<ColumnDef> {
    table
        .keys()
        .iter()
        .enumerate()
        .map(|(ix, key)| {
            let sample = sample_value(table, ix);
            let is_date = date_by_name(key) || sample.is_some_and(looks_like_date);
            let is_numeric =
                !is_date && sample.is_some_and(|s| num::plain_number(s).is_some());
            ColumnDef {
                key: key.clone(),
                label: text::capitalize_first(key),
                is_date,
                is_numeric,
            }
        })
        .collect()
}

/// First non-empty value of one column within the sampled rows.
fn sample_value(table: &Table, col: usize) -> Option<&str> {
    table
        .records()
        .take(SAMPLE_DEPTH)
        .filter_map(|rec| rec.field(col))
        .find(|v| !v.is_empty())
}

fn date_by_name(key: &str) -> bool {
    let name = key.to_lowercase();
    DATE_NAME_HINTS.iter().any(|hint| name.contains(hint))
}

/// Short values like "15.50" must stay numeric, hence the length gate
/// before the parse is even attempted.
fn looks_like_date(sample: &str) -> bool {
    sample.len() > 5
        && sample.contains(['/', '.', '-'])
        && dates::parse_date(sample).is_some()
}
