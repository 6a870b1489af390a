use crate::domain::book::BookId;
use crate::domain::errors::DomainResult;
use crate::domain::review::entity::ReviewActivity;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Day,
    Month,
}

impl ReportPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Day => "day",
            ReportPeriod::Month => "month",
        }
    }
}

#[async_trait]
pub trait ReviewReportRepository: Send + Sync {
    /// Busiest period by review count, most recent period first on ties.
    async fn most_reviewed(&self, period: ReportPeriod) -> DomainResult<Option<ReviewActivity>>;
    /// Mean rating over all reviews of `book_id`, `None` without reviews.
    async fn average_rating(&self, book_id: BookId) -> DomainResult<Option<f64>>;
}
