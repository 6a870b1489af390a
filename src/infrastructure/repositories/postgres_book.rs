// src/infrastructure/repositories/postgres_book.rs
use super::map_sqlx;
use crate::domain::book::{
    Book, BookId, BookListFilter, BookReadRepository, BookSlug, BookSource, BookTitle, BookUpdate,
    BookWriteRepository, NewBook, SortDirection,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const BOOK_COLUMNS: &str = r#"id, book, title, author, "condition", slug, is_promoted, promotion_status, created_at, updated_at"#;

#[derive(Clone)]
pub struct PostgresBookWriteRepository {
    pool: PgPool,
}

impl PostgresBookWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBookReadRepository {
    pool: PgPool,
}

impl PostgresBookReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookRow {
    id: Uuid,
    book: String,
    title: String,
    author: Option<String>,
    condition: String,
    slug: String,
    is_promoted: bool,
    promotion_status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BookRow> for Book {
    type Error = DomainError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book {
            id: BookId(row.id),
            source: BookSource::new(row.book)?,
            title: BookTitle::new(row.title)?,
            author: row.author,
            condition: row.condition.parse()?,
            slug: BookSlug::new(row.slug)?,
            is_promoted: row.is_promoted,
            promotion_status: row.promotion_status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BookWriteRepository for PostgresBookWriteRepository {
    async fn insert(&self, book: NewBook) -> DomainResult<Book> {
        let NewBook {
            id,
            source,
            title,
            author,
            condition,
            slug,
            is_promoted,
            promotion_status,
            created_at,
            updated_at,
        } = book;

        let sql = format!(
            r#"INSERT INTO book (id, book, title, author, "condition", slug, is_promoted, promotion_status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {BOOK_COLUMNS}"#
        );
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(Uuid::from(id))
            .bind(source.as_str())
            .bind(title.as_str())
            .bind(author)
            .bind(condition.as_str())
            .bind(slug.as_str())
            .bind(is_promoted)
            .bind(promotion_status.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Book::try_from(row)
    }

    async fn update(&self, update: BookUpdate) -> DomainResult<Book> {
        let BookUpdate {
            id,
            title,
            author,
            condition,
            slug,
            promotion,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE book SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author);
        }

        if let Some(condition) = condition {
            builder.push(r#", "condition" = "#);
            builder.push_bind(condition.as_str());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some((status, is_promoted)) = promotion {
            builder.push(", promotion_status = ");
            builder.push_bind(status.as_str());
            builder.push(", is_promoted = ");
            builder.push_bind(is_promoted);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(BOOK_COLUMNS);

        let maybe_row = builder
            .build_query_as::<BookRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("book update conflict, please retry".into()))?;

        Book::try_from(row)
    }

    async fn delete(&self, id: BookId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("book not found".into()));
        }
        Ok(())
    }
}

/// `%value%` with LIKE wildcards in `value` matched literally.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl PostgresBookReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &BookListFilter) {
        let mut has_where = false;

        if let Some(title) = &filter.title {
            Self::next_clause(builder, &mut has_where);
            builder.push("title ILIKE ");
            builder.push_bind(contains_pattern(title));
        }
        if let Some(author) = &filter.author {
            Self::next_clause(builder, &mut has_where);
            builder.push("author ILIKE ");
            builder.push_bind(contains_pattern(author));
        }
        if let Some(condition) = filter.condition {
            Self::next_clause(builder, &mut has_where);
            builder.push(r#""condition" = "#);
            builder.push_bind(condition.as_str());
        }
    }

    fn next_clause(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
        builder.push(if *has_where { " AND " } else { " WHERE " });
        *has_where = true;
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, filter: &BookListFilter) {
        match filter.order_by_title {
            Some(SortDirection::Asc) => builder.push(" ORDER BY title ASC, id ASC"),
            Some(SortDirection::Desc) => builder.push(" ORDER BY title DESC, id DESC"),
            None => builder.push(" ORDER BY created_at DESC, id DESC"),
        };
    }
}

#[async_trait]
impl BookReadRepository for PostgresBookReadRepository {
    async fn find_by_id(&self, id: BookId) -> DomainResult<Option<Book>> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM book WHERE id = $1");
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Book::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &BookSlug) -> DomainResult<Option<Book>> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM book WHERE slug = $1");
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Book::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &BookSlug, excluding: Option<BookId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM book WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug.as_str())
        .bind(excluding.map(Uuid::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        filter: &BookListFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Book>, bool)> {
        let limit = limit.clamp(1, 100);
        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::Validation("page offset out of range".into()))?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {BOOK_COLUMNS} FROM book"));
        Self::apply_filter(&mut builder, filter);
        Self::apply_ordering(&mut builder, filter);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit) + 1);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<BookRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut books = rows
            .into_iter()
            .map(Book::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let has_more = books.len() > limit as usize;
        books.truncate(limit as usize);

        Ok((books, has_more))
    }
}
