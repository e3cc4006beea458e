//! Fetch a chat with its most recent messages.

use parley_types::chat::{ChatId, ChatWithMessages, MessageLimit};
use parley_types::error::ChatError;
use tracing::{error, info};

use super::require_chat;
use crate::repository::chat::ChatRepository;
use crate::repository::message::MessageRepository;

pub struct GetChatWithMessages<C: ChatRepository, M: MessageRepository> {
    chat_repo: C,
    message_repo: M,
}

impl<C: ChatRepository, M: MessageRepository> GetChatWithMessages<C, M> {
    pub fn new(chat_repo: C, message_repo: M) -> Self {
        Self {
            chat_repo,
            message_repo,
        }
    }

    /// Returns the chat and at most `limit` of its messages, newest first.
    pub async fn execute(
        &self,
        chat_id: ChatId,
        limit: MessageLimit,
    ) -> Result<ChatWithMessages, ChatError> {
        info!(chat_id = %chat_id, limit = limit.get(), "Fetching chat with recent messages");

        let chat = require_chat(&self.chat_repo, chat_id).await?;

        let messages = self
            .message_repo
            .get_last_messages(chat_id, limit.get())
            .await
            .map_err(|e| {
                error!(chat_id = %chat_id, error = %e, "Failed to load messages");
                ChatError::internal(format!("could not get messages for chat id={chat_id}"), e)
            })?;

        info!(chat_id = %chat_id, count = messages.len(), "Messages loaded");
        Ok(ChatWithMessages { chat, messages })
    }
}
