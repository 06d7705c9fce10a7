// tests/table_view.rs
//
// Filter, search, sort and display against one parsed sheet.
//
use sitelog::columns::infer_columns;
use sitelog::table::Table;
use sitelog::view::{self, FilterState, SortDir, SortSpec};
use sitelog::{s, svec};

const SHEET: &str = "\
Date,Amount,Type,Area
01/02/2024,\"1,000.50\",A,North
15/06/2024,200,B,South
bad,abc,C,North
03/03/2024,50,A,East
";

#[test]
fn facet_filter_is_exact_and_case_sensitive() {
    let table = Table::parse(SHEET);
    let mut filters = FilterState::default();
    filters.set("Area", "North");
    assert_eq!(view::matching_rows(&table, &filters, ""), vec![0, 2]);

    // "north" is a different value
    filters.set("Area", "north");
    assert!(view::matching_rows(&table, &filters, "").is_empty());
}

#[test]
fn selecting_the_empty_value_clears_the_filter() {
    let table = Table::parse(SHEET);
    let mut filters = FilterState::default();
    filters.set("Type", "A");
    assert_eq!(view::matching_rows(&table, &filters, "").len(), 2);
    filters.set("Type", "");
    assert_eq!(view::matching_rows(&table, &filters, "").len(), 4);
}

#[test]
fn a_filter_on_a_missing_key_matches_nothing() {
    let table = Table::parse(SHEET);
    let mut filters = FilterState::default();
    filters.set("Ghost", "x");
    assert!(view::matching_rows(&table, &filters, "").is_empty());
}

#[test]
fn search_is_case_insensitive_substring_over_all_fields() {
    let table = Table::parse(SHEET);
    let filters = FilterState::default();
    assert_eq!(view::matching_rows(&table, &filters, "south"), vec![1]);
    assert_eq!(view::matching_rows(&table, &filters, "00"), vec![0, 1]);
    assert!(view::matching_rows(&table, &filters, "zzz").is_empty());
}

#[test]
fn filters_and_search_combine_from_the_full_table() {
    let table = Table::parse(SHEET);
    let mut filters = FilterState::default();
    filters.set("Type", "A");
    // "south" only lives on a Type B row, so the intersection is empty
    assert!(view::matching_rows(&table, &filters, "south").is_empty());
    assert_eq!(view::matching_rows(&table, &filters, "north"), vec![0]);
}

#[test]
fn date_sort_sinks_unparseable_rows_in_both_directions() {
    let table = Table::parse(SHEET);
    let columns = infer_columns(&table);
    let mut ix = view::matching_rows(&table, &FilterState::default(), "");

    let asc = SortSpec { key: s!("Date"), dir: SortDir::Asc };
    view::sort_rows(&table, &columns, &mut ix, &asc);
    assert_eq!(ix, vec![0, 3, 1, 2]);

    let desc = SortSpec { key: s!("Date"), dir: SortDir::Desc };
    view::sort_rows(&table, &columns, &mut ix, &desc);
    assert_eq!(ix, vec![1, 3, 0, 2]);
}

#[test]
fn numeric_sort_coerces_noise_and_zeroes_failures() {
    let table = Table::parse(SHEET);
    let columns = infer_columns(&table);
    let mut ix = view::matching_rows(&table, &FilterState::default(), "");
    let spec = SortSpec { key: s!("Amount"), dir: SortDir::Asc };
    view::sort_rows(&table, &columns, &mut ix, &spec);
    // "abc" coerces to zero, then 50, 200, 1000.50
    assert_eq!(ix, vec![2, 3, 1, 0]);
}

#[test]
fn string_sort_keeps_table_order_for_ties() {
    let table = Table::parse(SHEET);
    let columns = infer_columns(&table);
    let mut ix = view::matching_rows(&table, &FilterState::default(), "");
    let spec = SortSpec { key: s!("Type"), dir: SortDir::Asc };
    view::sort_rows(&table, &columns, &mut ix, &spec);
    // the two A rows stay in sheet order
    assert_eq!(ix, vec![0, 3, 1, 2]);
}

#[test]
fn display_formats_currency_cells_only() {
    let table = Table::parse(SHEET);
    let columns = infer_columns(&table);
    let rows = view::display_rows(&table, &columns, &[0, 2]);
    assert_eq!(rows[0], svec!["01/02/2024", "₹1,000.50", "A", "North"]);
    // an unparseable amount passes through untouched
    assert_eq!(rows[1][1], "abc");
}
