use crate::domain::review::{ReportPeriod, ReviewActivity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewActivityDto {
    pub period: ReportPeriod,
    pub publish_date: NaiveDate,
    pub review_count: i64,
}

impl ReviewActivityDto {
    pub fn new(period: ReportPeriod, activity: ReviewActivity) -> Self {
        Self {
            period,
            publish_date: activity.period_start,
            review_count: activity.review_count,
        }
    }

    /// `2024-03-14` for days, `2024-03` for months.
    pub fn label(&self) -> String {
        match self.period {
            ReportPeriod::Month => self.publish_date.format("%Y-%m").to_string(),
            ReportPeriod::Day => self.publish_date.format("%Y-%m-%d").to_string(),
        }
    }
}
