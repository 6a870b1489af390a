use super::BookQueryService;
use crate::{
    application::{
        dto::BookDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::book::BookSlug,
};

pub struct GetBookBySlugQuery {
    pub slug: String,
}

impl BookQueryService {
    pub async fn get_book_by_slug(&self, query: GetBookBySlugQuery) -> ApplicationResult<BookDto> {
        // a malformed slug cannot match anything
        let slug = BookSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("book not found"))?;
        let book = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("book not found"))?;

        self.with_rating(book).await
    }
}
