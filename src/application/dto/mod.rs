pub mod books;
pub mod pagination;
pub mod reviews;

pub use books::BookDto;
pub use pagination::Page;
pub use reviews::ReviewActivityDto;
