// tests/export_bundle.rs
//
// Export assembly: the full matching set, display formatting, filename
// shape, sink plumbing. A recording sink stands in for the PDF layer.
//
use sitelog::config::reports::ReportId;
use sitelog::error::SitelogError;
use sitelog::export::{build_bundle, export_report, ExportSink};
use sitelog::session::ReportSession;
use sitelog::{s, svec};

#[derive(Default)]
struct RecordingSink {
    calls: Vec<(String, Vec<String>, usize)>,
}

impl ExportSink for RecordingSink {
    fn render(
        &mut self,
        title: &str,
        labels: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), SitelogError> {
        self.calls.push((s!(title), labels.to_vec(), rows.len()));
        Ok(())
    }
}

struct BrokenSink;
impl ExportSink for BrokenSink {
    fn render(
        &mut self,
        _title: &str,
        _labels: &[String],
        _rows: &[Vec<String>],
    ) -> Result<(), SitelogError> {
        Err(SitelogError::Export(s!("out of toner")))
    }
}

fn loaded_session(rows: usize) -> ReportSession {
    let mut csv = s!("Date,Area,Amount\n");
    for i in 0..rows {
        csv.push_str(&format!(
            "{:02}/05/2024,Zone {},{}\n",
            (i % 28) + 1,
            i % 2,
            i * 100
        ));
    }
    let mut session = ReportSession::new(ReportId::Worklog);
    let ticket = session.begin_fetch();
    session.apply_csv(ticket, &csv);
    session
}

#[test]
fn bundle_takes_every_matching_row_not_just_the_page() {
    let mut session = loaded_session(35);
    session.set_filter("Area", "Zone 1");

    let bundle = build_bundle(&session);
    assert_eq!(bundle.rows.len(), 17);
    assert_eq!(session.visible().rows.len(), 10); // page one of the same set
    assert_eq!(bundle.labels, svec!["Date", "Area", "Amount"]);
}

#[test]
fn filename_is_the_title_with_underscores_and_suffix() {
    let bundle = build_bundle(&loaded_session(3));
    assert_eq!(bundle.title, "Work Log");
    assert_eq!(bundle.filename, "Work_Log_Report.pdf");
    assert!(chrono::NaiveDate::parse_from_str(&bundle.generated_on, "%d/%m/%Y").is_ok());
}

#[test]
fn two_word_report_titles_underscore_cleanly() {
    let mut session = ReportSession::new(ReportId::Enquiries);
    let ticket = session.begin_fetch();
    session.apply_csv(ticket, "Name,Phone\nAsha,12345\n");
    let bundle = build_bundle(&session);
    assert_eq!(bundle.filename, "Site_Enquiries_Report.pdf");
}

#[test]
fn money_columns_are_formatted_in_the_export() {
    let bundle = build_bundle(&loaded_session(2));
    assert_eq!(bundle.rows[1][2], "₹100.00");
}

#[test]
fn export_keeps_the_current_sort_order() {
    let mut session = loaded_session(5);
    session.toggle_sort("Amount");
    session.toggle_sort("Amount"); // descending
    let bundle = build_bundle(&session);
    assert_eq!(bundle.rows[0][2], "₹400.00");
}

#[test]
fn export_report_drives_the_sink_once() {
    let session = loaded_session(4);
    let mut sink = RecordingSink::default();

    let bundle = export_report(&session, &mut sink).unwrap();
    assert_eq!(sink.calls.len(), 1);

    let (title, labels, rows) = &sink.calls[0];
    assert_eq!(title, "Work Log");
    assert_eq!(labels, &bundle.labels);
    assert_eq!(*rows, 4);
}

#[test]
fn sink_failures_come_back_as_errors() {
    let session = loaded_session(1);
    let err = export_report(&session, &mut BrokenSink).unwrap_err();
    assert!(matches!(err, SitelogError::Export(_)));
}
