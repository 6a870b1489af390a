//! Core of the book catalog backend.
//!
//! Books get a URL-safe slug derived from their title; the slug is unique
//! across the catalog and tracks title changes until someone sets it by hand.
//! Review activity can be summarised per day or month.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
