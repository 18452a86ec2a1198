use std::sync::Arc;

use teloxide::prelude::*;

use ilb_core::{
    domain::ChatId,
    messaging::types::{InlineButton, InlineKeyboard},
};

use crate::router::AppState;

pub(crate) const CALLBACK_PHONE_HELP: &str = "help_phone";
pub(crate) const CALLBACK_RC_HELP: &str = "help_rc";

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let (cmd, _args) = parse_command(text);
    let chat_id = ChatId(msg.chat.id.0);

    match cmd.as_str() {
        "start" | "menu" => {
            let keyboard = InlineKeyboard::single_row(vec![
                InlineButton::new("📞 Phone Lookup", CALLBACK_PHONE_HELP),
                InlineButton::new("🚗 RC Lookup", CALLBACK_RC_HELP),
            ]);
            let _ = state
                .messenger
                .send_inline_keyboard(chat_id, START_TEXT, keyboard)
                .await;
        }
        "help" => {
            let _ = state.messenger.send_html(chat_id, HELP_TEXT).await;
        }
        "phone" => {
            let _ = state.messenger.send_html(chat_id, PHONE_HELP_TEXT).await;
        }
        "rc" => {
            let _ = state.messenger.send_html(chat_id, RC_HELP_TEXT).await;
        }
        _ => {
            let _ = state
                .messenger
                .send_html(chat_id, "Unknown command. Use /help to see what I can do.")
                .await;
        }
    }

    Ok(())
}

pub(crate) const START_TEXT: &str = "\
👋 <b>Welcome to Info Lookup Bot!</b>

I can help you with:

📞 <b>Phone Number Lookup</b>
Get detailed information about any phone number

🚗 <b>Vehicle RC Lookup</b>
Get complete vehicle registration details

👇 Choose an option below or send:
• Phone number (e.g., <code>+919876543210</code>)
• RC number (e.g., <code>MH12DE1433</code>)

Use /help for detailed instructions.";

pub(crate) const HELP_TEXT: &str = "\
ℹ️ <b>How to use this bot:</b>

📞 <b>Phone Number Lookup:</b>
Send any phone number with country code
Example: <code>+919876543210</code>, <code>+1-555-123-4567</code>

🚗 <b>Vehicle RC Lookup:</b>
Send a vehicle registration number
Example: <code>MH12DE1433</code>, <code>DL01AB1234</code>

<b>Commands:</b>
/start - Main menu
/help - This help message
/phone - Phone lookup help
/rc - RC lookup help

⚠️ <b>Disclaimer:</b>
This bot provides information for educational purposes only. Users are responsible for their actions.";

pub(crate) const PHONE_HELP_TEXT: &str = "\
📞 <b>Phone Number Lookup Help</b>

<b>Supported formats:</b>
• <code>+919876543210</code>
• <code>+1 (555) 123-4567</code>
• <code>+44 20 7946 0958</code>

<b>Information provided:</b>
✓ Country &amp; Region
✓ Carrier/Operator
✓ Line Type (Mobile/Fixed/VoIP)
✓ Timezone
✓ Validity Status
✓ Formatted Numbers

Just send a phone number to get started!";

pub(crate) const RC_HELP_TEXT: &str = "\
🚗 <b>Vehicle RC Lookup Help</b>

<b>Example formats:</b>
• <code>MH12DE1433</code>
• <code>DL01AB1234</code>
• <code>KA01MN5678</code>

<b>Information provided:</b>
🚗 Ownership Details
🧰 Vehicle Specifications
📄 Insurance Information
🗓 Important Dates
🚫 Blacklist Status

Just send a vehicle registration number!

⚠️ <b>Note:</b> Information is for educational purposes only.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_command() {
        assert_eq!(parse_command("/start"), ("start".to_string(), String::new()));
    }

    #[test]
    fn parses_command_with_bot_suffix_and_args() {
        assert_eq!(
            parse_command("/rc@info_lookup_bot MH12DE1433"),
            ("rc".to_string(), "MH12DE1433".to_string())
        );
    }

    #[test]
    fn help_texts_are_nonempty() {
        for text in [START_TEXT, HELP_TEXT, PHONE_HELP_TEXT, RC_HELP_TEXT] {
            assert!(!text.trim().is_empty());
        }
    }
}
