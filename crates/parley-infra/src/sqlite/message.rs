//! SQLite message repository implementation.
//!
//! Implements `MessageRepository` from `parley-core` using sqlx with split
//! read/write pools.

use parley_core::repository::message::MessageRepository;
use parley_types::chat::{ChatId, Message, MessageText};
use parley_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{parse_datetime, query_error};

/// SQLite-backed implementation of `MessageRepository`.
#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct MessageRow {
    id: i64,
    chat_id: i64,
    text: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            text: row.try_get("text")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        Ok(Message {
            id: self.id,
            chat_id: ChatId(self.chat_id),
            text: self.text,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl MessageRepository for SqliteMessageRepository {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &MessageText,
    ) -> Result<Message, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO message (chat_id, text) VALUES (?, ?)
             RETURNING id, chat_id, text, created_at",
        )
        .bind(chat_id.0)
        .bind(text.as_str())
        .fetch_one(&self.pool.writer)
        .await;

        match result {
            Ok(row) => MessageRow::from_row(&row)
                .map_err(query_error)?
                .into_message(),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                tracing::debug!(chat_id = %chat_id, "Message insert rejected by foreign key");
                Err(RepositoryError::NotFound)
            }
            Err(e) => Err(query_error(e)),
        }
    }

    async fn get_last_messages(
        &self,
        chat_id: ChatId,
        limit: u32,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, chat_id, text, created_at FROM message
             WHERE chat_id = ?
             ORDER BY created_at DESC, id DESC
             LIMIT ?",
        )
        .bind(chat_id.0)
        .bind(i64::from(limit))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let message_row = MessageRow::from_row(row).map_err(query_error)?;
            messages.push(message_row.into_message()?);
        }

        Ok(messages)
    }
}
