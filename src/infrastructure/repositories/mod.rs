// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_book;
mod postgres_review;

use error::map_sqlx;
pub use postgres_book::{PostgresBookReadRepository, PostgresBookWriteRepository};
pub use postgres_review::PostgresReviewReportRepository;
