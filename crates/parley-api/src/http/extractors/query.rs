//! Query parameter extractors.

use serde::Deserialize;

use parley_types::chat::MessageLimit;
use parley_types::error::ValidationError;

/// Query parameters for `GET /chats/{id}`.
#[derive(Debug, Deserialize, Default)]
pub struct ChatQuery {
    /// Number of recent messages to include (20..=100, default 20).
    pub limit: Option<i64>,
}

impl ChatQuery {
    pub fn message_limit(&self) -> Result<MessageLimit, ValidationError> {
        match self.limit {
            Some(limit) => MessageLimit::new(limit),
            None => Ok(MessageLimit::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_limit_defaults_to_twenty() {
        let query = ChatQuery::default();
        assert_eq!(query.message_limit().unwrap().get(), 20);
    }

    #[test]
    fn test_out_of_range_limit_rejected() {
        let query = ChatQuery { limit: Some(101) };
        assert!(matches!(
            query.message_limit(),
            Err(ValidationError::LimitOutOfRange { value: 101, .. })
        ));
    }
}
