use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::{dto::ReviewActivityDto, error::ApplicationResult},
    domain::{
        book::BookId,
        review::{ReportPeriod, ReviewReportRepository, whole_stars},
    },
};

pub struct MostReviewedQuery {
    pub period: ReportPeriod,
}

/// Aggregate reporting over published reviews.
pub struct ReviewReportService {
    review_repo: Arc<dyn ReviewReportRepository>,
}

impl ReviewReportService {
    pub fn new(review_repo: Arc<dyn ReviewReportRepository>) -> Self {
        Self { review_repo }
    }

    /// `None` when no review has been published yet.
    pub async fn most_reviewed(
        &self,
        query: MostReviewedQuery,
    ) -> ApplicationResult<Option<ReviewActivityDto>> {
        let activity = self.review_repo.most_reviewed(query.period).await?;
        Ok(activity.map(|a| ReviewActivityDto::new(query.period, a)))
    }

    pub async fn average_rating(&self, book_id: Uuid) -> ApplicationResult<Option<i32>> {
        let average = self.review_repo.average_rating(BookId(book_id)).await?;
        Ok(whole_stars(average))
    }
}
