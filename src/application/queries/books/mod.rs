mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetBookByIdQuery;
pub use get_by_slug::GetBookBySlugQuery;
pub use list::ListBooksQuery;
pub use service::BookQueryService;
