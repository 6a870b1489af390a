use crate::domain::book::{Book, BookCondition, PromotionStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: Uuid,
    pub book: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub condition: BookCondition,
    pub slug: String,
    pub is_promoted: bool,
    pub promotion_status: PromotionStatus,
    /// Truncated average of the book's review ratings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookDto {
    pub fn with_rating(mut self, rating: Option<i32>) -> Self {
        self.rating = rating;
        self
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.into(),
            book: book.source.into_inner(),
            title: book.title.into_inner(),
            author: book.author,
            condition: book.condition,
            slug: book.slug.into_inner(),
            is_promoted: book.is_promoted,
            promotion_status: book.promotion_status,
            rating: None,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}
