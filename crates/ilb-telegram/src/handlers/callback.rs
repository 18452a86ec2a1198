use std::sync::Arc;

use teloxide::prelude::*;

use ilb_core::domain::{ChatId, MessageId, MessageRef};

use crate::handlers::commands;
use crate::router::AppState;

/// Button callbacks from the /start menu. The button renders the same help
/// text as the matching command, replacing the menu message in place.
pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    // Always answer the callback so the client stops its progress spinner.
    let _ = state.messenger.answer_callback_query(&q.id, None).await;

    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    let data = q.data.as_deref().unwrap_or_default();

    let html = match data {
        commands::CALLBACK_PHONE_HELP => commands::PHONE_HELP_TEXT,
        commands::CALLBACK_RC_HELP => commands::RC_HELP_TEXT,
        _ => return Ok(()),
    };

    let msg_ref = MessageRef {
        chat_id: ChatId(message.chat.id.0),
        message_id: MessageId(message.id.0),
    };

    // Edit the menu message; fall back to a fresh send when editing fails
    // (e.g. the message is too old).
    if state.messenger.edit_html(msg_ref, html).await.is_err() {
        let _ = state.messenger.send_html(msg_ref.chat_id, html).await;
    }

    Ok(())
}
