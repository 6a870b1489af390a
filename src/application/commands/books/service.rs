// src/application/commands/books/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        book::{BookReadRepository, BookSlug, BookWriteRepository, services::BookSlugService},
        errors::DomainResult,
    },
};

pub struct BookCommandService {
    pub(super) write_repo: Arc<dyn BookWriteRepository>,
    pub(super) read_repo: Arc<dyn BookReadRepository>,
    pub(super) slug_service: Arc<BookSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BookCommandService {
    pub fn new(
        write_repo: Arc<dyn BookWriteRepository>,
        read_repo: Arc<dyn BookReadRepository>,
        slug_service: Arc<BookSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}

/// What a command asks for in its `slug` field.
pub(super) enum SlugRequest {
    /// Field omitted.
    Keep,
    /// Field present but blank: derive the slug from the title.
    Reset,
    Set(BookSlug),
}

impl SlugRequest {
    pub(super) fn parse(raw: Option<String>) -> DomainResult<Self> {
        match raw {
            None => Ok(Self::Keep),
            Some(value) if value.trim().is_empty() => Ok(Self::Reset),
            Some(value) => BookSlug::new(value.trim()).map(Self::Set),
        }
    }
}
