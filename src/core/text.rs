// src/core/text.rs

/// Uppercase the first character, leave the rest alone. Sheet headers are
/// already human-authored; this is the only cleanup labels get.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

/// Collapse whitespace runs to single underscores. Filename assembly.
pub fn underscore_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_us = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !last_us { out.push('_'); last_us = true; }
        } else { out.push(ch); last_us = false; }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_only() {
        assert_eq!(capitalize_first("site area"), "Site area");
        assert_eq!(capitalize_first("MA"), "MA");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn underscores_for_filenames() {
        assert_eq!(underscore_ws("Work Log"), "Work_Log");
        assert_eq!(underscore_ws("Site  Enquiries"), "Site_Enquiries");
    }
}
