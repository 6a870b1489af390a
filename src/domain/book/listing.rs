use crate::domain::book::value_objects::BookCondition;
use crate::domain::errors::DomainError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "order must be `asc` or `desc`, got `{other}`"
            ))),
        }
    }
}

/// Collection filters. Text filters are case-insensitive substring matches.
///
/// Without `order_by_title` books come newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookListFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<BookCondition>,
    pub order_by_title: Option<SortDirection>,
}

impl BookListFilter {
    /// Drop blank text filters so they match everything.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.title = non_blank(self.title);
        self.author = non_blank(self.author);
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
