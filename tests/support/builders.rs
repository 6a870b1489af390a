// tests/support/builders.rs
use bookshelf_core::domain::book::{
    Book, BookCondition, BookId, BookSlug, BookSource, BookTitle, PromotionStatus,
};

use crate::support::mocks::fixed_now;

pub struct BookBuilder {
    title: String,
    slug: String,
    source: String,
    author: Option<String>,
    condition: BookCondition,
}

impl BookBuilder {
    pub fn new(title: &str, slug: &str) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
            source: format!(
                "https://openlibrary.org/books/{}.json",
                BookId::generate()
            ),
            author: Some("Dan Simmons".into()),
            condition: BookCondition::NewCondition,
        }
    }

    pub fn author(mut self, author: Option<&str>) -> Self {
        self.author = author.map(str::to_string);
        self
    }

    pub fn condition(mut self, condition: BookCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn build(self) -> Book {
        Book {
            id: BookId::generate(),
            source: BookSource::new(self.source).unwrap(),
            title: BookTitle::new(self.title).unwrap(),
            author: self.author,
            condition: self.condition,
            slug: BookSlug::new(self.slug).unwrap(),
            is_promoted: false,
            promotion_status: PromotionStatus::None,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub fn book(title: &str, slug: &str) -> Book {
    BookBuilder::new(title, slug).build()
}

pub fn openlibrary_url(n: u32) -> String {
    format!("https://openlibrary.org/books/OL{n:07}M.json")
}
