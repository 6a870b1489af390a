// src/domain/review/entity.rs
use chrono::NaiveDate;

/// Number of reviews published within one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewActivity {
    /// The day itself, or the first day of the month for monthly reports.
    pub period_start: NaiveDate,
    pub review_count: i64,
}

/// Averages are reported as whole stars, rounded toward zero.
#[allow(clippy::cast_possible_truncation)]
pub fn whole_stars(average: Option<f64>) -> Option<i32> {
    average
        .filter(|avg| avg.is_finite() && *avg > 0.0)
        .map(|avg| avg.trunc() as i32)
}
