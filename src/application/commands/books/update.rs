use super::{BookCommandService, service::SlugRequest};
use crate::{
    application::{
        dto::BookDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::book::{Book, BookCondition, BookId, BookTitle, BookUpdate, slug},
};
use uuid::Uuid;

pub struct UpdateBookCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<String>,
    pub slug: Option<String>,
}

impl BookCommandService {
    pub async fn update_book(&self, command: UpdateBookCommand) -> ApplicationResult<BookDto> {
        let UpdateBookCommand {
            id,
            title,
            author,
            condition,
            slug,
        } = command;
        let id = BookId(id);
        let mut book = self.load(id).await?;
        let mut update = BookUpdate::new(id, book.updated_at);

        let title = title.map(BookTitle::new).transpose()?;
        let condition = condition
            .as_deref()
            .map(str::parse::<BookCondition>)
            .transpose()?;
        let requested_slug = SlugRequest::parse(slug)?;

        if title.is_some() || author.is_some() || condition.is_some() {
            let now = self.clock.now();
            let new_title = title.unwrap_or_else(|| book.title.clone());
            let new_author = author
                .map(|a| Some(a).filter(|a| !a.trim().is_empty()))
                .unwrap_or_else(|| book.author.clone());
            let new_condition = condition.unwrap_or(book.condition);
            book.set_details(new_title.clone(), new_author.clone(), new_condition, now);
            update = update
                .with_title(new_title)
                .with_author(new_author)
                .with_condition(new_condition);
            update.set_updated_at(book.updated_at);
        }

        let reset_slug = match requested_slug {
            SlugRequest::Set(requested) => {
                if requested != book.slug {
                    book.set_slug(requested.clone(), self.clock.now());
                    update = update.with_slug(requested);
                    update.set_updated_at(book.updated_at);
                }
                false
            }
            SlugRequest::Reset => true,
            SlugRequest::Keep => false,
        };

        self.save_changes(book, update, reset_slug).await
    }

    pub(super) async fn load(&self, id: BookId) -> ApplicationResult<Book> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("book not found"))
    }

    /// Recompute a placeholder slug from the current title, then persist.
    ///
    /// With `reset_slug` the stored slug is treated as unset and always
    /// recomputed.
    pub(super) async fn save_changes(
        &self,
        mut book: Book,
        mut update: BookUpdate,
        reset_slug: bool,
    ) -> ApplicationResult<BookDto> {
        let current = (!reset_slug).then_some(&book.slug);
        let generated = slug::needs_recompute(current);
        if let Some(fresh) = self
            .slug_service
            .compute_slug(&book.title, current, Some(book.id))
            .await?
        {
            if fresh != book.slug {
                tracing::debug!(book_id = %book.id, from = %book.slug, to = %fresh, "replacing placeholder slug");
                book.set_slug(fresh.clone(), self.clock.now());
                update = update.with_slug(fresh);
                update.set_updated_at(book.updated_at);
            }
        }

        if update.is_empty() {
            return Ok(book.into());
        }

        let updated = self
            .update_with_slug_retry(&book.title, update, generated)
            .await?;
        tracing::info!(book_id = %updated.id, slug = %updated.slug, "book updated");
        Ok(updated.into())
    }
}
