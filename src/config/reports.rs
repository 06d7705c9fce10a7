// src/config/reports.rs
//! The four known reports. Static configuration, not runtime data: which
//! sheet tab each report reads, how it presents itself, and how its facet
//! strip is adjusted.
//!
//! Facet rule names match case-insensitively against a column's key *or*
//! label, so sheet authors can rename "MA" to "ma" without breaking the
//! blacklist.

use crate::config::consts::SHEET_BASE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportId {
    Worklog,
    Materials,
    Enquiries,
    TeaLog,
}

/// Static description of one report tab.
pub struct ReportDescriptor {
    pub id: ReportId,
    pub title: &'static str,
    pub category: &'static str,
    pub accent: &'static str, // hex color for the shell's tab strip
    gid: &'static str,        // sheet tab within SHEET_BASE
}

impl ReportDescriptor {
    /// Published CSV endpoint for this report's sheet tab.
    pub fn sheet_url(&self) -> String {
        join!(SHEET_BASE, "?gid=", self.gid, "&single=true&output=csv")
    }
}

/// Facet-strip adjustments for one report: columns pinned to the front or
/// back of the strip, and columns the auto-picker must skip.
#[derive(Clone, Copy, Debug, Default)]
pub struct FacetRules {
    pub pin_start: &'static [&'static str],
    pub pin_end: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

pub static REPORTS: [ReportDescriptor; 4] = [
    ReportDescriptor {
        id: ReportId::Worklog,
        title: "Work Log",
        category: "site",
        accent: "#2563eb",
        gid: "0",
    },
    ReportDescriptor {
        id: ReportId::Materials,
        title: "Materials",
        category: "stock",
        accent: "#16a34a",
        gid: "1214689348",
    },
    ReportDescriptor {
        id: ReportId::Enquiries,
        title: "Site Enquiries",
        category: "sales",
        accent: "#d97706",
        gid: "900635117",
    },
    ReportDescriptor {
        id: ReportId::TeaLog,
        title: "Tea Log",
        category: "canteen",
        accent: "#dc2626",
        gid: "1723480211",
    },
];

impl ReportId {
    pub fn descriptor(self) -> &'static ReportDescriptor {
        match self {
            ReportId::Worklog => &REPORTS[0],
            ReportId::Materials => &REPORTS[1],
            ReportId::Enquiries => &REPORTS[2],
            ReportId::TeaLog => &REPORTS[3],
        }
    }

    pub fn facet_rules(self) -> FacetRules {
        match self {
            // "MA" is a bookkeeping flag sheet-side; description text is
            // near-unique but the crew wants it pinned as the last facet.
            ReportId::Worklog => FacetRules {
                pin_start: &[],
                pin_end: &["work description"],
                exclude: &["ma"],
            },
            ReportId::Materials => FacetRules {
                pin_start: &["material", "materials"],
                pin_end: &[],
                exclude: &[],
            },
            ReportId::Enquiries => FacetRules::default(),
            ReportId::TeaLog => FacetRules {
                pin_start: &[],
                pin_end: &[],
                exclude: &["biscuit", "biscuits"],
            },
        }
    }
}
