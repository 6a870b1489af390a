use crate::domain::book::entity::{Book, BookUpdate, NewBook};
use crate::domain::book::listing::BookListFilter;
use crate::domain::book::value_objects::{BookId, BookSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait BookWriteRepository: Send + Sync {
    /// Fails with `UniqueConstraintViolation` when the slug is already stored.
    async fn insert(&self, book: NewBook) -> DomainResult<Book>;
    async fn update(&self, update: BookUpdate) -> DomainResult<Book>;
    async fn delete(&self, id: BookId) -> DomainResult<()>;
}

#[async_trait]
pub trait BookReadRepository: Send + Sync {
    async fn find_by_id(&self, id: BookId) -> DomainResult<Option<Book>>;
    async fn find_by_slug(&self, slug: &BookSlug) -> DomainResult<Option<Book>>;
    /// Whether `slug` belongs to a book other than `excluding`.
    async fn slug_exists(&self, slug: &BookSlug, excluding: Option<BookId>) -> DomainResult<bool>;
    /// One page of books matching `filter`, and whether more follow it.
    async fn list_page(
        &self,
        filter: &BookListFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Book>, bool)>;
}
