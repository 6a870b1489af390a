// tests/support/mocks/books.rs
use std::collections::{HashMap, VecDeque};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use bookshelf_core::domain::{
    book::{
        Book, BookId, BookListFilter, BookReadRepository, BookSlug, BookUpdate,
        BookWriteRepository, NewBook, SortDirection,
    },
    errors::{DomainError, DomainResult},
};

/// Book store that enforces slug uniqueness the way the database index does.
#[derive(Default)]
pub struct InMemoryBookRepo {
    books: Mutex<HashMap<BookId, Book>>,
    pub slug_lookups: AtomicUsize,
}

impl InMemoryBookRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.books.lock().unwrap();
            for book in books {
                map.insert(book.id, book);
            }
        }
        repo
    }

    pub fn get(&self, id: BookId) -> Option<Book> {
        self.books.lock().unwrap().get(&id).cloned()
    }

    pub fn put(&self, book: Book) {
        self.books.lock().unwrap().insert(book.id, book);
    }

    pub fn slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self
            .books
            .lock()
            .unwrap()
            .values()
            .map(|b| b.slug.as_str().to_string())
            .collect();
        slugs.sort();
        slugs
    }

    fn slug_taken(map: &HashMap<BookId, Book>, slug: &BookSlug, excluding: Option<BookId>) -> bool {
        map.values()
            .any(|b| &b.slug == slug && Some(b.id) != excluding)
    }
}

#[async_trait]
impl BookWriteRepository for InMemoryBookRepo {
    async fn insert(&self, book: NewBook) -> DomainResult<Book> {
        let mut map = self.books.lock().unwrap();
        if Self::slug_taken(&map, &book.slug, None) {
            return Err(DomainError::UniqueConstraintViolation("book.slug".into()));
        }
        if map.values().any(|b| b.source == book.source) {
            return Err(DomainError::Conflict("book source already exists".into()));
        }
        let stored = Book {
            id: book.id,
            source: book.source,
            title: book.title,
            author: book.author,
            condition: book.condition,
            slug: book.slug,
            is_promoted: book.is_promoted,
            promotion_status: book.promotion_status,
            created_at: book.created_at,
            updated_at: book.updated_at,
        };
        map.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: BookUpdate) -> DomainResult<Book> {
        let mut map = self.books.lock().unwrap();
        if let Some(slug) = &update.slug {
            if Self::slug_taken(&map, slug, Some(update.id)) {
                return Err(DomainError::UniqueConstraintViolation("book.slug".into()));
            }
        }
        let book = map
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("book not found".into()))?;
        if book.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("book update conflict, please retry".into()));
        }

        if let Some(title) = update.title {
            book.title = title;
        }
        if let Some(author) = update.author {
            book.author = author;
        }
        if let Some(condition) = update.condition {
            book.condition = condition;
        }
        if let Some(slug) = update.slug {
            book.slug = slug;
        }
        if let Some((status, is_promoted)) = update.promotion {
            book.promotion_status = status;
            book.is_promoted = is_promoted;
        }
        book.updated_at = update.updated_at;
        Ok(book.clone())
    }

    async fn delete(&self, id: BookId) -> DomainResult<()> {
        self.books
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("book not found".into()))
    }
}

#[async_trait]
impl BookReadRepository for InMemoryBookRepo {
    async fn find_by_id(&self, id: BookId) -> DomainResult<Option<Book>> {
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &BookSlug) -> DomainResult<Option<Book>> {
        let map = self.books.lock().unwrap();
        Ok(map.values().find(|b| &b.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &BookSlug, excluding: Option<BookId>) -> DomainResult<bool> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        let map = self.books.lock().unwrap();
        Ok(Self::slug_taken(&map, slug, excluding))
    }

    async fn list_page(
        &self,
        filter: &BookListFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Book>, bool)> {
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };
        let mut books: Vec<Book> = self
            .books
            .lock()
            .unwrap()
            .values()
            .filter(|b| filter.title.as_deref().is_none_or(|t| contains(b.title.as_str(), t)))
            .filter(|b| {
                filter
                    .author
                    .as_deref()
                    .is_none_or(|a| b.author.as_deref().is_some_and(|ba| contains(ba, a)))
            })
            .filter(|b| filter.condition.is_none_or(|c| b.condition == c))
            .cloned()
            .collect();

        match filter.order_by_title {
            Some(SortDirection::Asc) => books.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str())),
            Some(SortDirection::Desc) => books.sort_by(|a, b| b.title.as_str().cmp(a.title.as_str())),
            None => books.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0))),
        }

        let mut page: Vec<Book> = books
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize + 1)
            .collect();
        let has_more = page.len() > limit as usize;
        page.truncate(limit as usize);
        Ok((page, has_more))
    }
}

/// Write side where a competing writer stores the next queued intruder right
/// before each write goes through, so the pre-checked slug is gone by then.
pub struct RacingBookRepo {
    inner: Arc<InMemoryBookRepo>,
    intruders: Mutex<VecDeque<Book>>,
    pub raced: AtomicBool,
    pub writes: AtomicUsize,
}

impl RacingBookRepo {
    pub fn new(inner: Arc<InMemoryBookRepo>, intruders: impl IntoIterator<Item = Book>) -> Self {
        Self {
            inner,
            intruders: Mutex::new(intruders.into_iter().collect()),
            raced: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    fn let_intruder_in(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(book) = self.intruders.lock().unwrap().pop_front() {
            self.inner.put(book);
            self.raced.store(true, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl BookWriteRepository for RacingBookRepo {
    async fn insert(&self, book: NewBook) -> DomainResult<Book> {
        self.let_intruder_in();
        self.inner.insert(book).await
    }

    async fn update(&self, update: BookUpdate) -> DomainResult<Book> {
        self.let_intruder_in();
        self.inner.update(update).await
    }

    async fn delete(&self, id: BookId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
