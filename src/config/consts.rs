// src/config/consts.rs

// Net config
pub const SHEET_BASE: &str =
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vQe7TkONztTzLmFCbcgoPZqdXpNluAEkXjcYW0oHBQZk5dDtqSvRgJ4w8PnA6cUmK9rLxI3fEyB2hdVo/pub";
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "sitelog/1.1";

// Column inference
pub const SAMPLE_DEPTH: usize = 10; // rows scanned for a type sample
pub const DATE_NAME_HINTS: [&str; 3] = ["date", "timestamp", "time"];
pub const CURRENCY_HINTS: [&str; 4] = ["amount", "price", "cost", "total"];

// Facets
pub const MAX_FACETS: usize = 4;
pub const FACET_DISTINCT_CEILING: usize = 20; // exclusive

// Paging
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;

// Export
pub const EXPORT_SUFFIX: &str = "_Report.pdf";
pub const EXPORT_DATE_FORMAT: &str = "%d/%m/%Y";
