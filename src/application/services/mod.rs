// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::books::BookCommandService,
        ports::ClockPort,
        queries::{books::BookQueryService, reviews::ReviewReportService},
    },
    domain::{
        book::{BookReadRepository, BookWriteRepository, services::BookSlugService},
        review::ReviewReportRepository,
    },
};

pub struct ApplicationServices {
    pub book_commands: Arc<BookCommandService>,
    pub book_queries: Arc<BookQueryService>,
    pub review_reports: Arc<ReviewReportService>,
}

impl ApplicationServices {
    pub fn new(
        book_write_repo: Arc<dyn BookWriteRepository>,
        book_read_repo: Arc<dyn BookReadRepository>,
        review_repo: Arc<dyn ReviewReportRepository>,
        clock: Arc<ClockPort>,
        slug_max_attempts: u64,
    ) -> Self {
        let slug_service = Arc::new(BookSlugService::new(
            Arc::clone(&book_read_repo),
            slug_max_attempts,
        ));

        let book_commands = Arc::new(BookCommandService::new(
            Arc::clone(&book_write_repo),
            Arc::clone(&book_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let book_queries = Arc::new(BookQueryService::new(
            Arc::clone(&book_read_repo),
            Arc::clone(&review_repo),
        ));
        let review_reports = Arc::new(ReviewReportService::new(Arc::clone(&review_repo)));

        Self {
            book_commands,
            book_queries,
            review_reports,
        }
    }
}
