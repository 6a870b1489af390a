use super::BookQueryService;
use crate::{
    application::{
        dto::BookDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::book::BookId,
};
use uuid::Uuid;

pub struct GetBookByIdQuery {
    pub id: Uuid,
}

impl BookQueryService {
    pub async fn get_book_by_id(&self, query: GetBookByIdQuery) -> ApplicationResult<BookDto> {
        let book = self
            .read_repo
            .find_by_id(BookId(query.id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("book not found"))?;

        self.with_rating(book).await
    }
}
