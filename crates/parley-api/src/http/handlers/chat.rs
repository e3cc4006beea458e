//! Chat and message HTTP handlers.
//!
//! Endpoints:
//! - POST   /chats/                 - Create a chat
//! - POST   /chats/{id}/messages/   - Post a message into a chat
//! - GET    /chats/{id}?limit=N     - Get a chat with its last N messages
//! - DELETE /chats/{id}             - Delete a chat and its messages
//!
//! Handlers only translate: body/path/query into validated inputs, use case
//! outcomes into status codes. The rules live in the use cases.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use parley_types::chat::{Chat, ChatId, ChatTitle, ChatWithMessages, Message, MessageText};

use crate::http::error::AppError;
use crate::http::extractors::query::ChatQuery;
use crate::http::extractors::validated::{AppJson, AppPath, AppQuery};
use crate::state::AppState;

/// Body of `POST /chats/`.
#[derive(Debug, Deserialize)]
pub struct CreateChatRequest {
    pub title: String,
}

/// Body of `POST /chats/{id}/messages/`.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

/// POST /chats/ - Create a new chat.
pub async fn create_chat(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateChatRequest>,
) -> Result<(StatusCode, Json<Chat>), AppError> {
    let title = ChatTitle::parse(&body.title)?;
    let chat = state.create_chat.execute(&title).await?;
    Ok((StatusCode::CREATED, Json(chat)))
}

/// POST /chats/{id}/messages/ - Send a message into an existing chat.
pub async fn send_message(
    State(state): State<AppState>,
    AppPath(id): AppPath<ChatId>,
    AppJson(body): AppJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let text = MessageText::parse(&body.text)?;
    let message = state.send_message.execute(id, &text).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /chats/{id} - Get a chat with its most recent messages, newest first.
pub async fn get_chat(
    State(state): State<AppState>,
    AppPath(id): AppPath<ChatId>,
    AppQuery(query): AppQuery<ChatQuery>,
) -> Result<Json<ChatWithMessages>, AppError> {
    let limit = query.message_limit()?;
    let view = state.get_chat.execute(id, limit).await?;
    Ok(Json(view))
}

/// DELETE /chats/{id} - Delete a chat together with all of its messages.
pub async fn delete_chat(
    State(state): State<AppState>,
    AppPath(id): AppPath<ChatId>,
) -> Result<StatusCode, AppError> {
    state.delete_chat.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
