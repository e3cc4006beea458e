//! Chat repository trait definition.

use parley_types::chat::{Chat, ChatId, ChatTitle};
use parley_types::error::RepositoryError;

/// Repository trait for chat persistence.
///
/// Implementations live in parley-infra (e.g., SqliteChatRepository).
/// Every method is a single statement that commits before returning.
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait ChatRepository: Send + Sync {
    /// Insert a chat. Storage assigns the id and creation timestamp.
    fn create_chat(
        &self,
        title: &ChatTitle,
    ) -> impl std::future::Future<Output = Result<Chat, RepositoryError>> + Send;

    /// Look up a chat by id. Absence is `Ok(None)`, not an error.
    fn get_chat(
        &self,
        id: ChatId,
    ) -> impl std::future::Future<Output = Result<Option<Chat>, RepositoryError>> + Send;

    /// Delete a chat together with all of its messages.
    ///
    /// Returns `NotFound` if the row was already gone when the delete ran.
    fn delete_chat(
        &self,
        chat: &Chat,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
