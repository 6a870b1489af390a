// src/application/commands/books/persist.rs
//
// Writes that may race another writer for the same slug. The unique index on
// the slug is authoritative: when it rejects a generated slug, the slug is
// reassigned once against the now-current state before giving up.
use super::BookCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        book::{Book, BookTitle, BookUpdate, NewBook},
        errors::DomainError,
    },
};

impl BookCommandService {
    pub(super) async fn insert_with_slug_retry(
        &self,
        mut new_book: NewBook,
        slug_generated: bool,
    ) -> ApplicationResult<Book> {
        match self.write_repo.insert(new_book.clone()).await {
            Ok(book) => Ok(book),
            Err(err) if err.is_slug_collision() && slug_generated => {
                tracing::warn!(slug = %new_book.slug, "slug taken concurrently, reassigning");
                new_book.slug = self
                    .slug_service
                    .generate_unique_slug(&new_book.title, None)
                    .await?;
                self.write_repo.insert(new_book).await.map_err(slug_conflict)
            }
            Err(err) => Err(slug_conflict(err)),
        }
    }

    pub(super) async fn update_with_slug_retry(
        &self,
        title: &BookTitle,
        mut update: BookUpdate,
        slug_generated: bool,
    ) -> ApplicationResult<Book> {
        match self.write_repo.update(update.clone()).await {
            Ok(book) => Ok(book),
            Err(err) if err.is_slug_collision() && slug_generated => {
                tracing::warn!(book_id = %update.id, "slug taken concurrently, reassigning");
                let slug = self
                    .slug_service
                    .generate_unique_slug(title, Some(update.id))
                    .await?;
                update = update.with_slug(slug);
                self.write_repo.update(update).await.map_err(slug_conflict)
            }
            Err(err) => Err(slug_conflict(err)),
        }
    }
}

fn slug_conflict(err: DomainError) -> ApplicationError {
    match err {
        DomainError::UniqueConstraintViolation(detail) => {
            ApplicationError::conflict(format!("slug is already taken ({detail})"))
        }
        other => other.into(),
    }
}
