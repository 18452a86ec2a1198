//! Telegram update handlers.
//!
//! Each handler classifies/validates the inbound update, calls into the
//! lookup ports, and sends rendered results through the messaging port.
//! Lookups for different messages run independently; the handlers share
//! nothing but the immutable `AppState`.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;

mod callback;
mod commands;
mod text;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    callback::handle_callback(q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(raw) = msg.text() else {
        // Media and other message kinds are simply ignored.
        return Ok(());
    };

    if raw.trim_start().starts_with('/') {
        return commands::handle_command(msg, state).await;
    }

    text::handle_text(msg, state).await
}
