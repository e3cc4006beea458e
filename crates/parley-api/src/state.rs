//! Application state wiring the use cases together.
//!
//! AppState holds the concrete use case instances used by both the CLI and the
//! REST API. Use cases are generic over the repository traits; AppState pins
//! them to the SQLite implementations. Everything is constructed here, once,
//! from a single database pool.

use std::sync::Arc;

use parley_core::usecase::{CreateChat, DeleteChat, GetChatWithMessages, SendMessage};
use parley_infra::sqlite::chat::SqliteChatRepository;
use parley_infra::sqlite::message::SqliteMessageRepository;
use parley_infra::sqlite::pool::DatabasePool;

/// Concrete type aliases for the use case generics pinned to infra implementations.
pub type ConcreteCreateChat = CreateChat<SqliteChatRepository>;

pub type ConcreteSendMessage = SendMessage<SqliteChatRepository, SqliteMessageRepository>;

pub type ConcreteGetChat = GetChatWithMessages<SqliteChatRepository, SqliteMessageRepository>;

pub type ConcreteDeleteChat = DeleteChat<SqliteChatRepository>;

/// Shared application state holding all use cases.
#[derive(Clone)]
pub struct AppState {
    pub create_chat: Arc<ConcreteCreateChat>,
    pub send_message: Arc<ConcreteSendMessage>,
    pub get_chat: Arc<ConcreteGetChat>,
    pub delete_chat: Arc<ConcreteDeleteChat>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Connect to the database (running migrations) and wire the use cases.
    pub async fn init(database_url: &str, log_queries: bool) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url, log_queries).await?;
        Ok(Self::from_pool(db_pool))
    }

    /// Wire the use cases over an already opened pool.
    pub fn from_pool(db_pool: DatabasePool) -> Self {
        let chat_repo = SqliteChatRepository::new(db_pool.clone());
        let message_repo = SqliteMessageRepository::new(db_pool.clone());

        Self {
            create_chat: Arc::new(CreateChat::new(chat_repo.clone())),
            send_message: Arc::new(SendMessage::new(chat_repo.clone(), message_repo.clone())),
            get_chat: Arc::new(GetChatWithMessages::new(chat_repo.clone(), message_repo)),
            delete_chat: Arc::new(DeleteChat::new(chat_repo)),
            db_pool,
        }
    }
}
