// src/domain/book/services/mod.rs
use std::sync::Arc;

use crate::domain::book::repository::BookReadRepository;
use crate::domain::book::slug::{self, SlugCandidates};
use crate::domain::book::value_objects::{BookId, BookSlug, BookTitle};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for books.
pub struct BookSlugService {
    read_repo: Arc<dyn BookReadRepository>,
    max_attempts: u64,
}

impl BookSlugService {
    pub fn new(read_repo: Arc<dyn BookReadRepository>, max_attempts: u64) -> Self {
        Self {
            read_repo,
            max_attempts,
        }
    }

    /// Apply the recompute policy to `current` and return the slug to store.
    ///
    /// Returns `None` when the current slug is user-chosen and must be kept.
    pub async fn compute_slug(
        &self,
        title: &BookTitle,
        current: Option<&BookSlug>,
        excluding: Option<BookId>,
    ) -> DomainResult<Option<BookSlug>> {
        if !slug::needs_recompute(current) {
            return Ok(None);
        }
        self.generate_unique_slug(title, excluding).await.map(Some)
    }

    pub async fn generate_unique_slug(
        &self,
        title: &BookTitle,
        excluding: Option<BookId>,
    ) -> DomainResult<BookSlug> {
        let base = slug::normalize(title.as_str());
        self.assign_unique(base, excluding).await
    }

    /// Async counterpart of [`slug::assign_unique_slug`] backed by the read
    /// repository.
    pub async fn assign_unique(
        &self,
        base: BookSlug,
        excluding: Option<BookId>,
    ) -> DomainResult<BookSlug> {
        let mut bounded = SlugCandidates::new(base).limit(self.max_attempts);

        loop {
            let candidate = match bounded.next_candidate() {
                Ok(candidate) => candidate,
                Err(err) => {
                    tracing::error!(base = %bounded.base(), attempts = bounded.attempts(), "slug space exhausted");
                    return Err(err);
                }
            };
            if !self.read_repo.slug_exists(&candidate, excluding).await? {
                if bounded.attempts() > 1 {
                    tracing::debug!(slug = %candidate, attempts = bounded.attempts(), "resolved slug collision");
                }
                return Ok(candidate);
            }
        }
    }
}
