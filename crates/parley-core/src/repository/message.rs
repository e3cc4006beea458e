//! Message repository trait definition.

use parley_types::chat::{ChatId, Message, MessageText};
use parley_types::error::RepositoryError;

/// Repository trait for message persistence.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait MessageRepository: Send + Sync {
    /// Insert a message into a chat and return the stored record.
    ///
    /// Does not look the chat up first. If the storage-level foreign key
    /// rejects the insert, returns `NotFound`.
    fn send_message(
        &self,
        chat_id: ChatId,
        text: &MessageText,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Up to `limit` messages of a chat, newest first.
    ///
    /// Unknown chats yield an empty list.
    fn get_last_messages(
        &self,
        chat_id: ChatId,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
