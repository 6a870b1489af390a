// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod books;
pub mod reviews;
pub mod time;

pub use books::{InMemoryBookRepo, RacingBookRepo};
pub use reviews::FixedReviewReports;
pub use time::{DummyClock, fixed_now};
