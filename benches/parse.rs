// benches/parse.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use sitelog::columns::infer_columns;
use sitelog::table::Table;
use sitelog::view::{self, FilterState, SortDir, SortSpec};

/// Synthetic work log: quoted amounts, a facet-ish area column, the
/// occasional unparseable date, at a size a real sheet actually reaches.
fn sample_csv(rows: usize) -> String {
    let mut csv = String::from("Date,Area,Status,Work Description,Amount\n");
    for i in 0..rows {
        let date = if i % 97 == 0 {
            String::from("pending")
        } else {
            format!("{:02}/{:02}/2024", (i % 28) + 1, (i % 12) + 1)
        };
        csv.push_str(&format!(
            "{},Zone {},{},\"Task {}, phase {}\",\"{},{:03}.50\"\n",
            date,
            i % 5,
            if i % 3 == 0 { "Open" } else { "Done" },
            i,
            i % 4,
            (i % 90) + 1,
            i % 1000
        ));
    }
    csv
}

fn bench_pipeline(c: &mut Criterion) {
    let csv = sample_csv(2000);

    c.bench_function("parse_2k_rows", |b| {
        b.iter(|| {
            let table = Table::parse(black_box(&csv));
            black_box(table.len())
        })
    });

    let table = Table::parse(&csv);

    c.bench_function("infer_columns", |b| {
        b.iter(|| {
            let cols = infer_columns(black_box(&table));
            black_box(cols.len())
        })
    });

    let columns = infer_columns(&table);

    c.bench_function("search_2k_rows", |b| {
        let filters = FilterState::default();
        b.iter(|| {
            let ix = view::matching_rows(black_box(&table), &filters, "phase 3");
            black_box(ix.len())
        })
    });

    c.bench_function("date_sort_2k_rows", |b| {
        let base = view::matching_rows(&table, &FilterState::default(), "");
        let spec = SortSpec { key: String::from("Date"), dir: SortDir::Asc };
        b.iter(|| {
            let mut ix = base.clone();
            view::sort_rows(black_box(&table), &columns, &mut ix, &spec);
            black_box(ix.first().copied())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
