use crate::domain::book::slug::{FALLBACK_SLUG, MAX_SLUG_LEN};
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<BookId> for Uuid {
    fn from(value: BookId) -> Self {
        value.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe identifier, always non-empty and limited to `[a-z0-9-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookSlug(String);

impl BookSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at most {MAX_SLUG_LEN} characters"
            )));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(DomainError::Validation(
                "slug must contain only lowercase latin letters, numbers, or hyphens".into(),
            ));
        }
        Ok(Self(value))
    }

    pub(crate) fn untitled() -> Self {
        Self(FALLBACK_SLUG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BookSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BookSlug> for String {
    fn from(value: BookSlug) -> Self {
        value.0
    }
}

/// External reference to the catalogued work (e.g. an Open Library URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSource(String);

impl BookSource {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        let Some(rest) = trimmed.strip_prefix("https://") else {
            return Err(DomainError::Validation(
                "book source must be an https url".into(),
            ));
        };
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if !host.contains('.') || host.starts_with('.') || host.ends_with('.') {
            return Err(DomainError::Validation(
                "book source must point to a host with a top-level domain".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookCondition {
    NewCondition,
    RefurbishedCondition,
    DamagedCondition,
    UsedCondition,
}

impl BookCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookCondition::NewCondition => "NewCondition",
            BookCondition::RefurbishedCondition => "RefurbishedCondition",
            BookCondition::DamagedCondition => "DamagedCondition",
            BookCondition::UsedCondition => "UsedCondition",
        }
    }
}

impl FromStr for BookCondition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the schema.org IRI form as well as the bare name.
        let name = s.rsplit('/').next().unwrap_or(s);
        match name {
            "NewCondition" => Ok(BookCondition::NewCondition),
            "RefurbishedCondition" => Ok(BookCondition::RefurbishedCondition),
            "DamagedCondition" => Ok(BookCondition::DamagedCondition),
            "UsedCondition" => Ok(BookCondition::UsedCondition),
            other => Err(DomainError::Validation(format!(
                "unknown book condition: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionStatus {
    #[default]
    None,
    Promotion,
    Discount,
}

impl PromotionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionStatus::None => "none",
            PromotionStatus::Promotion => "promotion",
            PromotionStatus::Discount => "discount",
        }
    }
}

impl FromStr for PromotionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(PromotionStatus::None),
            "promotion" => Ok(PromotionStatus::Promotion),
            "discount" => Ok(PromotionStatus::Discount),
            other => Err(DomainError::Validation(format!(
                "unknown promotion status: {other}"
            ))),
        }
    }
}
