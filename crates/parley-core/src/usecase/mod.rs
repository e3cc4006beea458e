//! Use cases: one struct per business operation.
//!
//! Each use case is generic over the repository traits it needs and is wired
//! with concrete repositories by the application layer. Within one call the
//! repository operations run strictly in sequence, and the first failure ends
//! the operation. Nothing is retried.

pub mod create_chat;
pub mod delete_chat;
pub mod get_chat;
pub mod send_message;

pub use create_chat::CreateChat;
pub use delete_chat::DeleteChat;
pub use get_chat::GetChatWithMessages;
pub use send_message::SendMessage;

use parley_types::chat::{Chat, ChatId};
use parley_types::error::ChatError;
use tracing::{error, warn};

use crate::repository::chat::ChatRepository;

/// Existence check shared by every use case that targets a chat by id.
async fn require_chat<C: ChatRepository>(chat_repo: &C, id: ChatId) -> Result<Chat, ChatError> {
    match chat_repo.get_chat(id).await {
        Ok(Some(chat)) => Ok(chat),
        Ok(None) => {
            warn!(chat_id = %id, "Chat not found");
            Err(ChatError::NotFound(id))
        }
        Err(e) => {
            error!(chat_id = %id, error = %e, "Failed to look up chat");
            Err(ChatError::internal(format!("could not look up chat id={id}"), e))
        }
    }
}
