use std::sync::Arc;

use teloxide::prelude::*;

use ilb_core::{
    classify::{classify, Classification},
    domain::{ChatId, MessageRef},
    messaging::types::ChatAction,
    render,
};

use crate::router::AppState;

const GUIDANCE: &str = "\
❓ I couldn't recognise that input.

• Send a vehicle registration number like <code>MH12DE1433</code>
• Or a phone number with country code like <code>+14155552671</code>

Use /help for more information.";

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = ChatId(msg.chat.id.0);

    match classify(text) {
        Classification::Registration(code) => {
            tracing::info!(code = %code, "registration lookup requested");
            let ack = format!(
                "🔍 Looking up RC <code>{}</code> ...",
                render::escape_html(&code)
            );
            let searching = begin_lookup(&state, chat_id, &ack).await;

            let html = match state.registry.lookup(&code).await {
                Ok(report) => render::render_registration(&report),
                Err(err) => render::render_lookup_error(&err),
            };
            deliver(&state, chat_id, searching, &html).await;
        }
        Classification::Phone(candidate) => {
            tracing::info!("phone lookup requested");
            let ack = format!(
                "🔍 Analyzing phone number <code>{}</code> ...",
                render::escape_html(&candidate)
            );
            let searching = begin_lookup(&state, chat_id, &ack).await;

            let html = match state.phone.lookup(&candidate).await {
                Ok(report) => render::render_phone(&report),
                Err(err) => render::render_lookup_error(&err),
            };
            deliver(&state, chat_id, searching, &html).await;
        }
        Classification::Unrecognized => {
            let _ = state.messenger.send_html(chat_id, GUIDANCE).await;
        }
    }

    Ok(())
}

/// Send the transient "searching" acknowledgment plus a typing indicator.
async fn begin_lookup(state: &AppState, chat_id: ChatId, ack_html: &str) -> Option<MessageRef> {
    let _ = state
        .messenger
        .send_chat_action(chat_id, ChatAction::Typing)
        .await;
    state.messenger.send_html(chat_id, ack_html).await.ok()
}

/// Replace the acknowledgment with the result when the platform supports
/// editing; otherwise, or when the edit fails, send a fresh message.
async fn deliver(state: &AppState, chat_id: ChatId, ack: Option<MessageRef>, html: &str) {
    if state.messenger.capabilities().supports_edit {
        if let Some(ack) = ack {
            if state.messenger.edit_html(ack, html).await.is_ok() {
                return;
            }
        }
    }
    let _ = state.messenger.send_html(chat_id, html).await;
}
