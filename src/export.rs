// src/export.rs
//! Export assembly. The PDF layout engine is somebody else's problem: we
//! hand a sink the title, the column labels and the full matching row
//! set, already display-formatted. The generation-date line travels in
//! the bundle; sinks that draw one place it under the title.

use chrono::Local;

use crate::config::consts::{EXPORT_DATE_FORMAT, EXPORT_SUFFIX};
use crate::core::text;
use crate::error::SitelogError;
use crate::session::ReportSession;
use crate::view;

/// Opaque document sink: anything that can lay out a titled table.
pub trait ExportSink {
    fn render(
        &mut self,
        title: &str,
        labels: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), SitelogError>;
}

/// Everything one export needs, assembled up front.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportBundle {
    pub filename: String,
    pub title: String,
    pub generated_on: String,
    pub labels: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Assemble the export for the session's current view. Every matching
/// row goes in, not just the visible page; sort order and display
/// formatting carry over as-is.
pub fn build_bundle(session: &ReportSession) -> ExportBundle {
    let title = s!(session.descriptor().title);
    let ix = session.matching();
    ExportBundle {
        filename: join!(text::underscore_ws(&title), EXPORT_SUFFIX),
        generated_on: Local::now().format(EXPORT_DATE_FORMAT).to_string(),
        labels: session.columns().iter().map(|c| c.label.clone()).collect(),
        rows: view::display_rows(session.table(), session.columns(), &ix),
        title,
    }
}

/// Build the bundle for the current view and push it through a sink.
pub fn export_report(
    session: &ReportSession,
    sink: &mut dyn ExportSink,
) -> Result<ExportBundle, SitelogError> {
    let bundle = build_bundle(session);
    sink.render(&bundle.title, &bundle.labels, &bundle.rows)?;
    Ok(bundle)
}
