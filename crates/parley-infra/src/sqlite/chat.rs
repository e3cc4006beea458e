//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `parley-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, writes on the writer
//! pool and lookups on the reader pool.

use parley_core::repository::chat::ChatRepository;
use parley_types::chat::{Chat, ChatId, ChatTitle};
use parley_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{parse_datetime, query_error};

/// SQLite-backed implementation of `ChatRepository`.
#[derive(Clone)]
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Chat.
struct ChatRow {
    id: i64,
    title: String,
    created_at: String,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_chat(self) -> Result<Chat, RepositoryError> {
        Ok(Chat {
            id: ChatId(self.id),
            title: self.title,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl ChatRepository for SqliteChatRepository {
    async fn create_chat(&self, title: &ChatTitle) -> Result<Chat, RepositoryError> {
        let row = sqlx::query("INSERT INTO chat (title) VALUES (?) RETURNING id, title, created_at")
            .bind(title.as_str())
            .fetch_one(&self.pool.writer)
            .await
            .map_err(query_error)?;

        ChatRow::from_row(&row).map_err(query_error)?.into_chat()
    }

    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query("SELECT id, title, created_at FROM chat WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        match row {
            Some(row) => {
                let chat_row = ChatRow::from_row(&row).map_err(query_error)?;
                Ok(Some(chat_row.into_chat()?))
            }
            None => Ok(None),
        }
    }

    async fn delete_chat(&self, chat: &Chat) -> Result<(), RepositoryError> {
        // Messages go with the chat through ON DELETE CASCADE, in this statement.
        let result = sqlx::query("DELETE FROM chat WHERE id = ?")
            .bind(chat.id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(chat_id = %chat.id, "Chat row deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::message::SqliteMessageRepository;
    use crate::sqlite::test_support::test_pool;
    use parley_core::repository::message::MessageRepository;
    use parley_types::chat::MessageText;

    fn title(s: &str) -> ChatTitle {
        ChatTitle::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_chat() {
        let (_dir, pool) = test_pool().await;
        let repo = SqliteChatRepository::new(pool);

        let created = repo.create_chat(&title("Test chat")).await.unwrap();
        assert!(created.id.0 > 0);
        assert_eq!(created.title, "Test chat");

        let found = repo.get_chat(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_created_at_assigned_by_storage() {
        let (_dir, pool) = test_pool().await;
        let repo = SqliteChatRepository::new(pool);

        let before = chrono::Utc::now() - chrono::Duration::seconds(5);
        let chat = repo.create_chat(&title("Timestamps")).await.unwrap();
        let after = chrono::Utc::now() + chrono::Duration::seconds(5);

        assert!(chat.created_at > before && chat.created_at < after);
    }

    #[tokio::test]
    async fn test_get_missing_chat_is_none() {
        let (_dir, pool) = test_pool().await;
        let repo = SqliteChatRepository::new(pool);

        assert!(repo.get_chat(ChatId(9999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_messages() {
        let (_dir, pool) = test_pool().await;
        let chats = SqliteChatRepository::new(pool.clone());
        let messages = SqliteMessageRepository::new(pool.clone());

        let doomed = chats.create_chat(&title("Doomed")).await.unwrap();
        let survivor = chats.create_chat(&title("Survivor")).await.unwrap();
        for text in ["a", "b", "c"] {
            let text = MessageText::parse(text).unwrap();
            messages.send_message(doomed.id, &text).await.unwrap();
            messages.send_message(survivor.id, &text).await.unwrap();
        }

        chats.delete_chat(&doomed).await.unwrap();

        assert!(chats.get_chat(doomed.id).await.unwrap().is_none());
        assert!(messages.get_last_messages(doomed.id, 100).await.unwrap().is_empty());

        let orphans: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM message WHERE chat_id = ?")
            .bind(doomed.id.0)
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(orphans.0, 0);

        assert_eq!(
            messages.get_last_messages(survivor.id, 100).await.unwrap().len(),
            3
        );
    }

    #[tokio::test]
    async fn test_delete_already_deleted_is_not_found() {
        let (_dir, pool) = test_pool().await;
        let repo = SqliteChatRepository::new(pool);

        let chat = repo.create_chat(&title("Once")).await.unwrap();
        repo.delete_chat(&chat).await.unwrap();

        let err = repo.delete_chat(&chat).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
