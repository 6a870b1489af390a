//! Slug derivation for books.
//!
//! A slug is produced in two steps: [`normalize`] turns a title into a base
//! slug, then [`assign_unique_slug`] probes `base`, `base-1`, `base-2`, ...
//! against a caller supplied lookup until a free candidate is found.
//!
//! The probe is only a pre-check. The unique index on `book.slug` remains the
//! authoritative guard against two concurrent writers picking the same value.

use crate::domain::book::value_objects::BookSlug;
use crate::domain::errors::{DomainError, DomainResult};

/// Base used when a title has nothing that survives transliteration.
pub const FALLBACK_SLUG: &str = "untitled";

/// Prefix marking slugs that were machine generated and may be replaced.
///
/// NOTE: a hand-written slug that happens to start with `book-` is treated as
/// a placeholder too and will be recomputed on the next save.
pub const PLACEHOLDER_PREFIX: &str = "book-";

pub const DEFAULT_MAX_SLUG_ATTEMPTS: u64 = 10_000;

/// Width of the `book.slug` column.
pub const MAX_SLUG_LEN: usize = 255;

/// Room left for the longest `-N` suffix a `u64` counter can produce.
const MAX_BASE_LEN: usize = MAX_SLUG_LEN - 21;

/// Transliterate, lowercase and hyphenate `title`.
///
/// Never fails: when nothing usable remains the result is [`FALLBACK_SLUG`].
/// Long titles are cut at a word boundary so that any suffixed candidate
/// still fits the column.
pub fn normalize(title: &str) -> BookSlug {
    let slugified = ::slug::slugify(title);
    // slugify only emits [a-z0-9-] with hyphens trimmed; empty output is the
    // only way validation can fail here
    BookSlug::new(truncate_base(&slugified)).unwrap_or_else(|_| BookSlug::untitled())
}

fn truncate_base(slug: &str) -> &str {
    if slug.len() <= MAX_BASE_LEN {
        return slug;
    }
    // ASCII only, so byte offsets are char boundaries
    let head = &slug[..=MAX_BASE_LEN];
    let cut = match head.rfind('-') {
        Some(idx) if idx > 0 => &head[..idx],
        _ => &slug[..MAX_BASE_LEN],
    };
    cut.trim_end_matches('-')
}

/// Whether a stored slug should be regenerated from the title on save.
pub fn needs_recompute(current: Option<&BookSlug>) -> bool {
    current.is_none_or(is_placeholder)
}

pub fn is_placeholder(slug: &BookSlug) -> bool {
    slug.as_str().starts_with(PLACEHOLDER_PREFIX)
}

/// Candidates for a base slug in trial order: `base`, `base-1`, `base-2`, ...
#[derive(Debug, Clone)]
pub struct SlugCandidates {
    base: BookSlug,
    next_suffix: u64,
}

impl SlugCandidates {
    pub fn new(base: BookSlug) -> Self {
        Self {
            base,
            next_suffix: 0,
        }
    }

    pub fn base(&self) -> &BookSlug {
        &self.base
    }

    /// Bound the sequence to `max_attempts` candidates.
    pub fn limit(self, max_attempts: u64) -> BoundedCandidates {
        BoundedCandidates {
            candidates: self,
            max_attempts,
            attempts: 0,
        }
    }
}

impl Iterator for SlugCandidates {
    type Item = BookSlug;

    fn next(&mut self) -> Option<Self::Item> {
        let suffix = self.next_suffix;
        self.next_suffix = self.next_suffix.checked_add(1)?;
        if suffix == 0 {
            return Some(self.base.clone());
        }
        // base is [a-z0-9-]+ and the suffix adds only digits and a hyphen
        BookSlug::new(format!("{}-{suffix}", self.base)).ok()
    }
}

/// A [`SlugCandidates`] sequence with an attempt budget.
///
/// Each call to [`BoundedCandidates::next_candidate`] spends one attempt. Once the
/// budget is gone, or the candidates run out, it yields
/// [`DomainError::SlugSpaceExhausted`].
#[derive(Debug, Clone)]
pub struct BoundedCandidates {
    candidates: SlugCandidates,
    max_attempts: u64,
    attempts: u64,
}

impl BoundedCandidates {
    pub fn next_candidate(&mut self) -> DomainResult<BookSlug> {
        if self.attempts >= self.max_attempts {
            return Err(self.exhausted());
        }
        let candidate = self.candidates.next().ok_or_else(|| self.exhausted())?;
        self.attempts += 1;
        Ok(candidate)
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn base(&self) -> &BookSlug {
        self.candidates.base()
    }

    fn exhausted(&self) -> DomainError {
        DomainError::SlugSpaceExhausted {
            base: self.base().as_str().to_string(),
            attempts: self.attempts,
        }
    }
}

/// Return the first candidate derived from `base` for which `exists` is false.
///
/// `exists` must ignore the record being assigned so that a record never
/// collides with itself. Gives up with [`DomainError::SlugSpaceExhausted`]
/// after `max_attempts` taken candidates.
pub fn assign_unique_slug<F>(
    base: BookSlug,
    max_attempts: u64,
    mut exists: F,
) -> DomainResult<BookSlug>
where
    F: FnMut(&BookSlug) -> bool,
{
    let mut bounded = SlugCandidates::new(base).limit(max_attempts);
    loop {
        let candidate = bounded.next_candidate()?;
        if !exists(&candidate) {
            return Ok(candidate);
        }
    }
}
