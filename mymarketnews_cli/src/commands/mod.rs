//! CLI subcommand implementations.

pub mod market;
pub mod report;
pub mod report_dates;
pub mod report_fields;
pub mod reports;
