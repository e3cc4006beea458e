//! Delete a chat and, through the storage cascade, all of its messages.

use parley_types::chat::ChatId;
use parley_types::error::{ChatError, RepositoryError};
use tracing::{error, info, warn};

use super::require_chat;
use crate::repository::chat::ChatRepository;

pub struct DeleteChat<C: ChatRepository> {
    chat_repo: C,
}

impl<C: ChatRepository> DeleteChat<C> {
    pub fn new(chat_repo: C) -> Self {
        Self { chat_repo }
    }

    /// Delete the chat. Produces no value on success.
    ///
    /// Deleting an id that is already gone is `NotFound`, including when a
    /// concurrent request removed it between the lookup and the delete.
    pub async fn execute(&self, chat_id: ChatId) -> Result<(), ChatError> {
        info!(chat_id = %chat_id, "Deleting chat");

        let chat = require_chat(&self.chat_repo, chat_id).await?;

        match self.chat_repo.delete_chat(&chat).await {
            Ok(()) => {
                info!(chat_id = %chat_id, "Chat deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                warn!(chat_id = %chat_id, "Chat was deleted concurrently");
                Err(ChatError::NotFound(chat_id))
            }
            Err(e) => {
                error!(chat_id = %chat_id, error = %e, "Failed to delete chat");
                Err(ChatError::internal(format!("could not delete chat id={chat_id}"), e))
            }
        }
    }
}
