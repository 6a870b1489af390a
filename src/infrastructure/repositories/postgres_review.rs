// src/infrastructure/repositories/postgres_review.rs
use super::map_sqlx;
use crate::domain::book::BookId;
use crate::domain::errors::DomainResult;
use crate::domain::review::{ReportPeriod, ReviewActivity, ReviewReportRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresReviewReportRepository {
    pool: PgPool,
}

impl PostgresReviewReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityRow {
    period_start: NaiveDate,
    review_count: i64,
}

fn most_reviewed_sql(period: ReportPeriod) -> &'static str {
    match period {
        ReportPeriod::Day => {
            "SELECT published_at::date AS period_start, COUNT(id) AS review_count
             FROM review
             GROUP BY period_start
             ORDER BY review_count DESC, period_start DESC
             LIMIT 1"
        }
        ReportPeriod::Month => {
            "SELECT date_trunc('month', published_at)::date AS period_start, COUNT(id) AS review_count
             FROM review
             GROUP BY period_start
             ORDER BY review_count DESC, period_start DESC
             LIMIT 1"
        }
    }
}

#[async_trait]
impl ReviewReportRepository for PostgresReviewReportRepository {
    async fn most_reviewed(&self, period: ReportPeriod) -> DomainResult<Option<ReviewActivity>> {
        let row = sqlx::query_as::<_, ActivityRow>(most_reviewed_sql(period))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(|r| ReviewActivity {
            period_start: r.period_start,
            review_count: r.review_count,
        }))
    }

    async fn average_rating(&self, book_id: BookId) -> DomainResult<Option<f64>> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(rating)::float8 FROM review WHERE book_id = $1",
        )
        .bind(Uuid::from(book_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
