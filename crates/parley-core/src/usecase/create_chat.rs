//! Create a new chat.

use parley_types::chat::{Chat, ChatTitle};
use parley_types::error::ChatError;
use tracing::{error, info};

use crate::repository::chat::ChatRepository;

/// Creates a chat from an already validated title.
pub struct CreateChat<C: ChatRepository> {
    chat_repo: C,
}

impl<C: ChatRepository> CreateChat<C> {
    pub fn new(chat_repo: C) -> Self {
        Self { chat_repo }
    }

    /// Persist a chat with the given title and return it with its
    /// storage-assigned id and timestamp.
    ///
    /// A storage failure becomes `ChatError::Internal` naming the title.
    pub async fn execute(&self, title: &ChatTitle) -> Result<Chat, ChatError> {
        info!(title = %title, "Creating chat");

        match self.chat_repo.create_chat(title).await {
            Ok(chat) => {
                info!(chat_id = %chat.id, title = %title, "Chat created");
                Ok(chat)
            }
            Err(e) => {
                error!(title = %title, error = %e, "Failed to create chat");
                Err(ChatError::internal(format!("could not create chat '{title}'"), e))
            }
        }
    }
}
