// src/core/num.rs
//! Numeric coercion and money display.

/* ---------------- Parsing ---------------- */

/// Parse a cell as a plain number, tolerating thousands separators.
///
/// Strict parse after comma stripping, plus a digit requirement so that
/// "" and "inf" shaped strings stay non-numeric.
pub fn plain_number(value: &str) -> Option<f64> {
    let v = value.trim();
    if !v.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    v.replace(',', "").parse().ok()
}

/// Coerce a cell for numeric sorting: digits, the decimal point and a
/// leading minus survive, everything else goes. Cells that still refuse
/// to parse sort as zero.
pub fn coerced_number(value: &str) -> f64 {
    let mut kept = s!();
    for ch in value.chars() {
        match ch {
            '0'..='9' | '.' => kept.push(ch),
            '-' if kept.is_empty() => kept.push(ch),
            _ => {}
        }
    }
    kept.parse().unwrap_or(0.0)
}

/* ---------------- Money display ---------------- */

/// Fixed-locale money rendering: rupee sign, Indian digit grouping, two
/// decimal places. `1234567.5` becomes `₹12,34,567.50`.
pub fn format_rupees(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some(parts) => parts,
        None => (rounded.as_str(), "00"),
    };
    let sign = if negative { "-" } else { "" };
    join!(sign, "₹", &group_indian(int_part), ".", frac_part)
}

/// Last three digits together, then pairs: `1234567` → `12,34,567`.
fn group_indian(digits: &str) -> String {
    let n = digits.len();
    if n <= 3 {
        return s!(digits);
    }
    let (head, tail) = digits.split_at(n - 3);

    let mut groups = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
