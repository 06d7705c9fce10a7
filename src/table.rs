// src/table.rs
//
// Canonical parsed sheet data: one header key set plus uniform rows.
//
// - Table: read-only holder for one report's rows. Only a fetch replaces
//          it, wholesale; nothing downstream mutates it.
// - Record: a borrowed row viewed through the table's key set.
//
// Derived data (filtered index sets, display pages) lives in src/view.rs.

use tracing::debug;

use crate::core::csv::split_line;

/// Parsed sheet contents. Every row has exactly one field per header key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    keys: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse raw CSV text into a table.
    ///
    /// Lines split on CR or LF; blank lines are discarded. Fewer than two
    /// non-blank lines is a valid, empty sheet, not an error. Rows whose
    /// field count disagrees with the header are dropped whole: published
    /// sheets emit the occasional ragged row and partial recovery is more
    /// trouble than the row is worth.
    pub fn parse(text: &str) -> Table {
        let lines: Vec<&str> = text
            .split(['\r', '\n'])
            .filter(|l| !l.trim().is_empty())
            .collect();
        if lines.len() < 2 {
            return Table::default();
        }

        let keys = split_line(lines[0]);
        let mut rows = Vec::with_capacity(lines.len() - 1);
        let mut dropped = 0usize;
        for line in &lines[1..] {
            let fields = split_line(line);
            if fields.len() == keys.len() {
                rows.push(fields);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(dropped, "dropped rows with field count not matching header");
        }

        Table { keys, rows }
    }

    /// Header keys, in sheet order.
    pub fn keys(&self) -> &[String] { &self.keys }

    /// Number of data rows.
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Borrow a single row by table index (no cloning).
    pub fn record(&self, ix: usize) -> Option<Record<'_>> {
        self.rows.get(ix).map(|fields| Record {
            keys: self.keys.as_slice(),
            fields: fields.as_slice(),
        })
    }

    /// Iterate all rows in table order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(|fields| Record {
            keys: self.keys.as_slice(),
            fields: fields.as_slice(),
        })
    }
}

/// One row viewed as a key-to-value mapping. All rows of a table share the
/// table's key set, so lookups are a scan over the header.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    keys: &'a [String],
    fields: &'a [String],
}

impl<'a> Record<'a> {
    /// Value under a header key, if the key exists.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| self.fields[i].as_str())
    }

    /// Value by column position.
    pub fn field(&self, ix: usize) -> Option<&'a str> {
        self.fields.get(ix).map(String::as_str)
    }

    /// All field values, in key order.
    pub fn fields(&self) -> &'a [String] {
        self.fields
    }
}
