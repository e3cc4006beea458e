use thiserror::Error;

use crate::chat::ChatId;

/// Input rejected at the boundary, before any use case runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("title is {len} characters long, at most {max} allowed")]
    TitleTooLong { len: usize, max: usize },

    #[error("text cannot be empty")]
    EmptyText,

    #[error("limit must be between {min} and {max}, got {value}")]
    LimitOutOfRange { value: i64, min: u32, max: u32 },
}

/// Errors returned by the chat use cases.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat with id={0} not found")]
    NotFound(ChatId),

    /// A storage failure. `context` names the operation and the ids involved;
    /// `cause` is the storage error's message.
    #[error("{context}: {cause}")]
    Internal { context: String, cause: String },
}

impl ChatError {
    pub fn internal(context: impl Into<String>, cause: impl ToString) -> Self {
        ChatError::Internal {
            context: context.into(),
            cause: cause.to_string(),
        }
    }
}

/// Errors from repository operations (used by trait definitions in parley-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::TitleTooLong { len: 250, max: 200 };
        assert_eq!(err.to_string(), "title is 250 characters long, at most 200 allowed");

        let err = ValidationError::LimitOutOfRange {
            value: 5,
            min: 20,
            max: 100,
        };
        assert_eq!(err.to_string(), "limit must be between 20 and 100, got 5");
    }

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::NotFound(ChatId(9999)).to_string(),
            "chat with id=9999 not found"
        );

        let err = ChatError::internal(
            "could not send message to chat id=3",
            RepositoryError::Query("disk I/O error".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "could not send message to chat id=3: query error: disk I/O error"
        );
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
