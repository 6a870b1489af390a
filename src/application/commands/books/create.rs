// src/application/commands/books/create.rs
use super::{BookCommandService, service::SlugRequest};
use crate::{
    application::{dto::BookDto, error::ApplicationResult},
    domain::book::{
        BookCondition, BookId, BookSource, BookTitle, NewBook, PromotionStatus, slug,
    },
};

pub struct CreateBookCommand {
    pub book: String,
    pub title: String,
    pub author: Option<String>,
    pub condition: String,
    pub slug: Option<String>,
    pub promotion_status: Option<String>,
    pub is_promoted: bool,
}

impl CreateBookCommand {
    pub fn builder() -> CreateBookCommandBuilder {
        CreateBookCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateBookCommandBuilder {
    book: Option<String>,
    title: Option<String>,
    author: Option<String>,
    condition: Option<String>,
    slug: Option<String>,
    promotion_status: Option<String>,
    is_promoted: bool,
}

impl CreateBookCommandBuilder {
    pub fn book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn promotion_status(mut self, status: impl Into<String>) -> Self {
        self.promotion_status = Some(status.into());
        self
    }

    pub fn is_promoted(mut self, is_promoted: bool) -> Self {
        self.is_promoted = is_promoted;
        self
    }

    pub fn build(self) -> Result<CreateBookCommand, &'static str> {
        Ok(CreateBookCommand {
            book: self.book.ok_or("book is required")?,
            title: self.title.ok_or("title is required")?,
            author: self.author,
            condition: self.condition.ok_or("condition is required")?,
            slug: self.slug,
            promotion_status: self.promotion_status,
            is_promoted: self.is_promoted,
        })
    }
}

impl BookCommandService {
    pub async fn create_book(&self, command: CreateBookCommand) -> ApplicationResult<BookDto> {
        let source = BookSource::new(command.book)?;
        let title = BookTitle::new(command.title)?;
        let condition: BookCondition = command.condition.parse()?;
        let promotion_status = command
            .promotion_status
            .as_deref()
            .map(str::parse::<PromotionStatus>)
            .transpose()?
            .unwrap_or_default();
        let requested = match SlugRequest::parse(command.slug)? {
            SlugRequest::Set(slug) => Some(slug),
            SlugRequest::Keep | SlugRequest::Reset => None,
        };

        let generated = slug::needs_recompute(requested.as_ref());
        let slug = match requested {
            Some(slug) if !generated => slug,
            _ => self.slug_service.generate_unique_slug(&title, None).await?,
        };

        let now = self.clock.now();
        let new_book = NewBook {
            id: BookId::generate(),
            source,
            title,
            author: command.author.filter(|a| !a.trim().is_empty()),
            condition,
            slug,
            is_promoted: command.is_promoted,
            promotion_status,
            created_at: now,
            updated_at: now,
        };

        let created = self.insert_with_slug_retry(new_book, generated).await?;
        tracing::info!(book_id = %created.id, slug = %created.slug, "book created");
        Ok(created.into())
    }
}
