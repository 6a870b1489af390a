// tests/support/mocks/reviews.rs
use std::collections::HashMap;

use async_trait::async_trait;
use bookshelf_core::domain::{
    book::BookId,
    errors::DomainResult,
    review::{ReportPeriod, ReviewActivity, ReviewReportRepository},
};

/// Canned report answers keyed by period and book.
#[derive(Default)]
pub struct FixedReviewReports {
    pub by_day: Option<ReviewActivity>,
    pub by_month: Option<ReviewActivity>,
    pub averages: HashMap<BookId, f64>,
}

#[async_trait]
impl ReviewReportRepository for FixedReviewReports {
    async fn most_reviewed(&self, period: ReportPeriod) -> DomainResult<Option<ReviewActivity>> {
        Ok(match period {
            ReportPeriod::Day => self.by_day,
            ReportPeriod::Month => self.by_month,
        })
    }

    async fn average_rating(&self, book_id: BookId) -> DomainResult<Option<f64>> {
        Ok(self.averages.get(&book_id).copied())
    }
}
