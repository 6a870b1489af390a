pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod slug;
pub mod value_objects;

pub use entity::{Book, BookUpdate, NewBook};
pub use listing::{BookListFilter, SortDirection};
pub use repository::{BookReadRepository, BookWriteRepository};
pub use value_objects::{BookCondition, BookId, BookSlug, BookSource, BookTitle, PromotionStatus};
