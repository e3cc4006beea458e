//! Chat CLI commands: create, send, show, delete.
//!
//! These call the same use cases as the HTTP handlers, so validation and
//! not-found behaviour are identical on both surfaces.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use parley_types::chat::{ChatId, ChatTitle, MessageLimit, MessageText};

use crate::state::AppState;

/// Create a new chat.
///
/// ```bash
/// parley chat create "Weekly sync"
/// ```
pub async fn create_chat(state: &AppState, title: &str, json: bool) -> Result<()> {
    let title = ChatTitle::parse(title)?;
    let chat = state.create_chat.execute(&title).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chat)?);
        return Ok(());
    }

    println!();
    println!("  {} Chat created", style("✓").green().bold());
    println!();
    println!("  {}     {}", style("ID:").bold(), style(chat.id).cyan());
    println!("  {}  {}", style("Title:").bold(), &chat.title);
    println!(
        "  {}  {}",
        style("Added:").bold(),
        style(chat.created_at.to_rfc3339()).dim()
    );
    println!();

    Ok(())
}

/// Post a message into an existing chat.
pub async fn send_message(state: &AppState, id: ChatId, text: &str, json: bool) -> Result<()> {
    let text = MessageText::parse(text)?;
    let message = state.send_message.execute(id, &text).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        println!(
            "  {} Message {} sent to chat {}",
            style("✓").green().bold(),
            style(message.id).cyan(),
            style(message.chat_id).cyan()
        );
    }

    Ok(())
}

/// Show a chat and its most recent messages in a table, newest first.
pub async fn show_chat(state: &AppState, id: ChatId, limit: i64, json: bool) -> Result<()> {
    let limit = MessageLimit::new(limit)?;
    let view = state.get_chat.execute(id, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style(format!("#{}", view.chat.id)).dim(),
        style(&view.chat.title).cyan().bold()
    );
    println!();

    if view.messages.is_empty() {
        println!(
            "  {} No messages yet. Send one with: {}",
            style("i").blue().bold(),
            style(format!("parley chat send {} \"...\"", view.chat.id)).yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Sent").fg(Color::White),
        Cell::new("Text").fg(Color::White),
    ]);

    for message in &view.messages {
        table.add_row(vec![
            Cell::new(message.id).fg(Color::DarkGrey),
            Cell::new(message.created_at.format("%Y-%m-%d %H:%M:%S")).fg(Color::DarkGrey),
            Cell::new(&message.text),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} message{} (limit {})",
        style(view.messages.len()).bold(),
        if view.messages.len() == 1 { "" } else { "s" },
        limit.get()
    );
    println!();

    Ok(())
}

/// Delete a chat and all of its messages, asking first unless `force` is set.
pub async fn delete_chat(state: &AppState, id: ChatId, force: bool, json: bool) -> Result<()> {
    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Permanently delete chat {} and all its messages?",
                style(id).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.delete_chat.execute(id).await?;

    if json {
        println!("{}", serde_json::json!({"deleted": true, "id": id}));
    } else {
        println!("  {} Chat {} deleted.", style("✓").red().bold(), id);
    }

    Ok(())
}
