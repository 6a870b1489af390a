// src/application/commands/books/mod.rs
mod create;
mod delete;
mod persist;
mod promotion;
mod service;
mod update;

pub use create::{CreateBookCommand, CreateBookCommandBuilder};
pub use delete::DeleteBookCommand;
pub use promotion::SetPromotionCommand;
pub use service::BookCommandService;
pub use update::UpdateBookCommand;
