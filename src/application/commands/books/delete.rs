// src/application/commands/books/delete.rs
use super::BookCommandService;
use crate::{application::error::ApplicationResult, domain::book::BookId};
use uuid::Uuid;

pub struct DeleteBookCommand {
    pub id: Uuid,
}

impl BookCommandService {
    pub async fn delete_book(&self, command: DeleteBookCommand) -> ApplicationResult<()> {
        let id = BookId(command.id);
        let book = self.load(id).await?;
        self.write_repo.delete(id).await?;
        tracing::info!(book_id = %id, slug = %book.slug, "book deleted");
        Ok(())
    }
}
