//! Post a message into an existing chat.

use parley_types::chat::{ChatId, Message, MessageText};
use parley_types::error::{ChatError, RepositoryError};
use tracing::{error, info, warn};

use super::require_chat;
use crate::repository::chat::ChatRepository;
use crate::repository::message::MessageRepository;

/// Appends a message to a chat after checking that the chat exists.
///
/// The existence check and the insert are separate statements. If the chat is
/// deleted in between, the schema's foreign key rejects the insert and the
/// outcome is still `NotFound`.
pub struct SendMessage<C: ChatRepository, M: MessageRepository> {
    chat_repo: C,
    message_repo: M,
}

impl<C: ChatRepository, M: MessageRepository> SendMessage<C, M> {
    pub fn new(chat_repo: C, message_repo: M) -> Self {
        Self {
            chat_repo,
            message_repo,
        }
    }

    pub async fn execute(&self, chat_id: ChatId, text: &MessageText) -> Result<Message, ChatError> {
        info!(chat_id = %chat_id, "Sending message");

        require_chat(&self.chat_repo, chat_id).await?;

        match self.message_repo.send_message(chat_id, text).await {
            Ok(message) => {
                info!(chat_id = %chat_id, message_id = message.id, "Message sent");
                Ok(message)
            }
            Err(RepositoryError::NotFound) => {
                warn!(chat_id = %chat_id, "Chat disappeared before the message was stored");
                Err(ChatError::NotFound(chat_id))
            }
            Err(e) => {
                error!(chat_id = %chat_id, error = %e, "Failed to send message");
                Err(ChatError::internal(
                    format!("could not send message to chat id={chat_id}"),
                    e,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::testing::InMemoryStore;
    use crate::usecase::CreateChat;
    use parley_types::chat::ChatTitle;

    async fn store_with_chat() -> (InMemoryStore, ChatId) {
        let store = InMemoryStore::new();
        let chat = CreateChat::new(store.clone())
            .execute(&ChatTitle::parse("Test chat").unwrap())
            .await
            .unwrap();
        (store, chat.id)
    }

    #[tokio::test]
    async fn test_send_message_to_existing_chat() {
        let (store, chat_id) = store_with_chat().await;
        let use_case = SendMessage::new(store.clone(), store.clone());

        let message = use_case
            .execute(chat_id, &MessageText::parse("Hello").unwrap())
            .await
            .unwrap();

        assert_eq!(message.chat_id, chat_id);
        assert_eq!(message.text, "Hello");
        assert_eq!(store.message_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_chat_never_reaches_message_repository() {
        let store = InMemoryStore::new();
        let use_case = SendMessage::new(store.clone(), store.clone());

        let err = use_case
            .execute(ChatId(9999), &MessageText::parse("Hello").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::NotFound(ChatId(9999))));
        assert_eq!(store.message_repo_calls(), 0);
        assert_eq!(store.message_count(), 0);
    }

    #[tokio::test]
    async fn test_foreign_key_rejection_is_not_found() {
        let (store, chat_id) = store_with_chat().await;

        // The chat passes the existence check against one handle but is gone
        // by the time the insert runs against another.
        let checker = InMemoryStore::new();
        CreateChat::new(checker.clone())
            .execute(&ChatTitle::parse("Test chat").unwrap())
            .await
            .unwrap();
        store.remove_chat_silently(chat_id);

        let use_case = SendMessage::new(checker, store.clone());
        let err = use_case
            .execute(chat_id, &MessageText::parse("Hello").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::NotFound(id) if id == chat_id));
        assert_eq!(store.message_count(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal() {
        let (store, chat_id) = store_with_chat().await;
        let store = store.fail_on("send_message");
        let use_case = SendMessage::new(store.clone(), store.clone());

        let err = use_case
            .execute(chat_id, &MessageText::parse("Hello").unwrap())
            .await
            .unwrap_err();

        match err {
            ChatError::Internal { context, .. } => {
                assert!(context.contains(&format!("chat id={chat_id}")));
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lookup_failure_is_internal() {
        let (store, chat_id) = store_with_chat().await;
        let store = store.fail_on("get_chat");
        let use_case = SendMessage::new(store.clone(), store.clone());

        let err = use_case
            .execute(chat_id, &MessageText::parse("Hello").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::Internal { .. }));
        assert_eq!(store.message_repo_calls(), 0);
    }
}
