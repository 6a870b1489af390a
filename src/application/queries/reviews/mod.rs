mod service;

pub use service::{MostReviewedQuery, ReviewReportService};
