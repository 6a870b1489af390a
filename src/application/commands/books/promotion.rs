use super::BookCommandService;
use crate::{
    application::{dto::BookDto, error::ApplicationResult},
    domain::book::{BookId, BookUpdate, PromotionStatus},
};
use uuid::Uuid;

pub struct SetPromotionCommand {
    pub id: Uuid,
    pub status: String,
    /// Defaults to `status != none` when omitted.
    pub is_promoted: Option<bool>,
}

impl BookCommandService {
    pub async fn set_promotion(&self, command: SetPromotionCommand) -> ApplicationResult<BookDto> {
        let id = BookId(command.id);
        let status: PromotionStatus = command.status.parse()?;
        let is_promoted = command
            .is_promoted
            .unwrap_or(status != PromotionStatus::None);

        let mut book = self.load(id).await?;
        let mut update = BookUpdate::new(id, book.updated_at);

        if book.promotion_status != status || book.is_promoted != is_promoted {
            book.set_promotion(status, is_promoted, self.clock.now());
            update = update.with_promotion(status, is_promoted);
            update.set_updated_at(book.updated_at);
            tracing::info!(book_id = %id, status = status.as_str(), is_promoted, "promotion changed");
        }

        self.save_changes(book, update, false).await
    }
}
