// src/core/csv.rs
use std::mem::take;

/* ---------------- Line tokenizer ---------------- */

/// Split one raw CSV line into trimmed, unquoted field values.
///
/// Two passes. The scan only *toggles* quote mode to decide which commas
/// separate fields; quote characters stay in the raw field. Cleanup then
/// runs per field: trim, strip one enclosing quote pair, collapse `""`
/// to `"`. A trailing comma yields a trailing empty field. Unbalanced
/// quotes never fail; the tail of the line just rides along in whatever
/// mode the last quote left the scan in.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                field.push(ch);
            }
            ',' if !in_quotes => fields.push(take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);

    fields.iter().map(|raw| clean_field(raw)).collect()
}

/// Trim first, so quotes with surrounding whitespace still count as
/// enclosing. Whitespace *inside* the quotes survives.
fn clean_field(raw: &str) -> String {
    let t = raw.trim();
    let unquoted = if t.len() >= 2 && t.starts_with('"') && t.ends_with('"') {
        &t[1..t.len() - 1]
    } else {
        t
    };
    unquoted.replace("\"\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_stays_in_field() {
        assert_eq!(split_line(r#"a,"b,c",d"#), svec!["a", "b,c", "d"]);
    }

    #[test]
    fn doubled_quote_collapses() {
        assert_eq!(split_line(r#"a,"b""c",d"#), svec!["a", "b\"c", "d"]);
    }

    #[test]
    fn trailing_comma_is_empty_field() {
        assert_eq!(split_line("a,b,"), svec!["a", "b", ""]);
    }

    #[test]
    fn whitespace_outside_quotes_trims_inside_survives() {
        assert_eq!(split_line(r#" x , " y,z " "#), svec!["x", " y,z "]);
    }

    #[test]
    fn unbalanced_quote_degrades_without_error() {
        assert_eq!(split_line(r#"a,"b,c"#), svec!["a", "\"b,c"]);
    }
}
