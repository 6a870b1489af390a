use super::BookQueryService;
use crate::{
    application::{
        dto::{BookDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        book::{BookCondition, BookListFilter, SortDirection},
        errors::DomainError,
    },
};

#[derive(Debug, Default)]
pub struct ListBooksQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<String>,
    /// `asc` or `desc`; orders by title when present.
    pub order: Option<String>,
    /// 1-based; 0 is read as the first page.
    pub page: u32,
    pub per_page: u32,
}

impl BookQueryService {
    pub async fn list_books(&self, query: ListBooksQuery) -> ApplicationResult<Page<BookDto>> {
        let (page, per_page) = Self::normalize_paging(query.page, query.per_page);
        let filter = BookListFilter {
            title: query.title,
            author: query.author,
            condition: query
                .condition
                .as_deref()
                .map(str::parse::<BookCondition>)
                .transpose()?,
            order_by_title: Self::parse_order(query.order.as_deref())?,
        }
        .normalized();

        let offset = u64::from(page - 1) * u64::from(per_page);
        let (books, has_more) = self.read_repo.list_page(&filter, per_page, offset).await?;

        let mut items = Vec::with_capacity(books.len());
        for book in books {
            items.push(self.with_rating(book).await?);
        }
        Ok(Page::new(items, page, per_page, has_more))
    }

    fn normalize_paging(page: u32, per_page: u32) -> (u32, u32) {
        const DEFAULT_PER_PAGE: u32 = 30;
        const MAX_PER_PAGE: u32 = 100;

        let per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page.min(MAX_PER_PAGE)
        };
        (page.max(1), per_page)
    }

    fn parse_order(order: Option<&str>) -> ApplicationResult<Option<SortDirection>> {
        match order.map(str::trim).filter(|o| !o.is_empty()) {
            Some(value) => match value.parse() {
                Ok(direction) => Ok(Some(direction)),
                Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
                Err(other) => Err(ApplicationError::from(other)),
            },
            None => Ok(None),
        }
    }
}
