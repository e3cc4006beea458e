//! Chat and message types for Parley.
//!
//! A chat is a named conversation container; a message is a single
//! timestamped text entry that belongs to exactly one chat. Both records are
//! immutable once stored: identity and creation time are assigned by storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Maximum length of a chat title, in characters, after trimming.
pub const MAX_TITLE_CHARS: usize = 200;

/// Storage-assigned identifier of a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChatId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A chat as persisted in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A message as persisted in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub chat_id: ChatId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A chat together with its most recent messages, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatWithMessages {
    #[serde(flatten)]
    pub chat: Chat,
    pub messages: Vec<Message>,
}

/// A chat title that has been trimmed and length-checked.
///
/// The only way to obtain one is [`ChatTitle::parse`], so anything holding a
/// `ChatTitle` can hand it to storage without re-validating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTitle(String);

impl ChatTitle {
    /// Trim surrounding whitespace and check the 1..=200 character bound.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let len = trimmed.chars().count();
        if len > MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong {
                len,
                max: MAX_TITLE_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message text that is known to contain something other than whitespace.
///
/// Unlike titles, the text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How many recent messages to return alongside a chat.
///
/// Bounded to `20..=100`; defaults to the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLimit(u32);

impl MessageLimit {
    pub const MIN: u32 = 20;
    pub const MAX: u32 = 100;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::LimitOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for MessageLimit {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        let title = ChatTitle::parse("  Test chat \n").unwrap();
        assert_eq!(title.as_str(), "Test chat");
    }

    #[test]
    fn test_empty_and_blank_titles_rejected() {
        assert!(matches!(ChatTitle::parse(""), Err(ValidationError::EmptyTitle)));
        assert!(matches!(
            ChatTitle::parse(" \t\n "),
            Err(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn test_title_length_bound() {
        let exact = "a".repeat(MAX_TITLE_CHARS);
        assert!(ChatTitle::parse(&exact).is_ok());

        // Surrounding whitespace does not count towards the limit.
        assert!(ChatTitle::parse(&format!("  {exact}  ")).is_ok());

        let long = "a".repeat(MAX_TITLE_CHARS + 1);
        let err = ChatTitle::parse(&long).unwrap_err();
        assert!(matches!(err, ValidationError::TitleTooLong { len: 201, max: 200 }));
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        let cyrillic = "ж".repeat(MAX_TITLE_CHARS);
        assert!(cyrillic.len() > MAX_TITLE_CHARS);
        assert!(ChatTitle::parse(&cyrillic).is_ok());
    }

    #[test]
    fn test_message_text_kept_verbatim() {
        let text = MessageText::parse("  Hello  ").unwrap();
        assert_eq!(text.as_str(), "  Hello  ");
        assert!(matches!(MessageText::parse("   "), Err(ValidationError::EmptyText)));
    }

    #[test]
    fn test_message_limit_bounds() {
        assert_eq!(MessageLimit::default().get(), 20);
        assert_eq!(MessageLimit::new(20).unwrap().get(), 20);
        assert_eq!(MessageLimit::new(100).unwrap().get(), 100);
        assert!(MessageLimit::new(19).is_err());
        assert!(MessageLimit::new(101).is_err());
        assert!(MessageLimit::new(-5).is_err());
    }

    #[test]
    fn test_chat_id_parse_and_display() {
        let id: ChatId = "42".parse().unwrap();
        assert_eq!(id, ChatId(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<ChatId>().is_err());
    }

    #[test]
    fn test_chat_with_messages_serializes_flat() {
        let now = Utc::now();
        let view = ChatWithMessages {
            chat: Chat {
                id: ChatId(7),
                title: "Standup".to_string(),
                created_at: now,
            },
            messages: vec![Message {
                id: 1,
                chat_id: ChatId(7),
                text: "Hello".to_string(),
                created_at: now,
            }],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Standup");
        assert_eq!(json["messages"][0]["chat_id"], 7);
        assert_eq!(json["messages"][0]["text"], "Hello");
    }
}
