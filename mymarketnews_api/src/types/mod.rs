mod table;
pub use self::table::{Record, Table};

mod report;
pub use self::report::ReportSummary;
