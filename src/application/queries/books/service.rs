use std::sync::Arc;

use crate::{
    application::{dto::BookDto, error::ApplicationResult},
    domain::{
        book::{Book, BookReadRepository},
        review::{ReviewReportRepository, whole_stars},
    },
};

pub struct BookQueryService {
    pub(super) read_repo: Arc<dyn BookReadRepository>,
    pub(super) review_repo: Arc<dyn ReviewReportRepository>,
}

impl BookQueryService {
    pub fn new(
        read_repo: Arc<dyn BookReadRepository>,
        review_repo: Arc<dyn ReviewReportRepository>,
    ) -> Self {
        Self {
            read_repo,
            review_repo,
        }
    }

    pub(super) async fn with_rating(&self, book: Book) -> ApplicationResult<BookDto> {
        let average = self.review_repo.average_rating(book.id).await?;
        Ok(BookDto::from(book).with_rating(whole_stars(average)))
    }
}
