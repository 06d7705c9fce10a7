// src/config/mod.rs

pub mod consts;
pub mod reports;

pub use reports::{FacetRules, ReportDescriptor, ReportId, REPORTS};
