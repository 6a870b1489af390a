// src/domain/book/entity.rs
use crate::domain::book::value_objects::{
    BookCondition, BookId, BookSlug, BookSource, BookTitle, PromotionStatus,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub source: BookSource,
    pub title: BookTitle,
    pub author: Option<String>,
    pub condition: BookCondition,
    pub slug: BookSlug,
    pub is_promoted: bool,
    pub promotion_status: PromotionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn set_slug(&mut self, slug: BookSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_details(
        &mut self,
        title: BookTitle,
        author: Option<String>,
        condition: BookCondition,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.author = author;
        self.condition = condition;
        self.updated_at = now;
    }

    pub fn set_promotion(
        &mut self,
        status: PromotionStatus,
        is_promoted: bool,
        now: DateTime<Utc>,
    ) {
        self.promotion_status = status;
        self.is_promoted = is_promoted;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub id: BookId,
    pub source: BookSource,
    pub title: BookTitle,
    pub author: Option<String>,
    pub condition: BookCondition,
    pub slug: BookSlug,
    pub is_promoted: bool,
    pub promotion_status: PromotionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub id: BookId,
    pub title: Option<BookTitle>,
    pub author: Option<Option<String>>,
    pub condition: Option<BookCondition>,
    pub slug: Option<BookSlug>,
    pub promotion: Option<(PromotionStatus, bool)>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookUpdate {
    pub fn new(id: BookId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            author: None,
            condition: None,
            slug: None,
            promotion: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: BookTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_condition(mut self, condition: BookCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_slug(mut self, slug: BookSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_promotion(mut self, status: PromotionStatus, is_promoted: bool) -> Self {
        self.promotion = Some((status, is_promoted));
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.condition.is_none()
            && self.slug.is_none()
            && self.promotion.is_none()
    }
}
