use crate::domain::errors::DomainError;

// PostgreSQL folds the unquoted index names of the book table to lowercase.
const CNT_BOOK_SLUG: &str = "uniq_cbe5a331989d9b62";
const CNT_BOOK_SOURCE: &str = "uniq_cbe5a331cbe5a331";
const CNT_REVIEW_BOOK: &str = "fk_794381c616a2b381";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_BOOK_SLUG => DomainError::UniqueConstraintViolation(CNT_BOOK_SLUG.into()),
                    CNT_BOOK_SOURCE => DomainError::Conflict("book source already exists".into()),
                    CNT_REVIEW_BOOK => DomainError::NotFound("book not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
