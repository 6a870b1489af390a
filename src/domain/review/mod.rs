pub mod entity;
pub mod repository;

pub use entity::{ReviewActivity, whole_stars};
pub use repository::{ReportPeriod, ReviewReportRepository};
