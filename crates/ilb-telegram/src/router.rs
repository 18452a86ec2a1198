use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use ilb_core::{
    config::Config,
    messaging::port::MessagingPort,
    ports::{PhoneLookup, RegistrationLookup},
};

use crate::handlers;
use crate::TelegramMessenger;

/// Immutable per-process wiring shared by every handler invocation.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub messenger: Arc<dyn MessagingPort>,
    pub registry: Arc<dyn RegistrationLookup>,
    pub phone: Arc<dyn PhoneLookup>,
}

pub async fn run_polling(
    cfg: Arc<Config>,
    registry: Arc<dyn RegistrationLookup>,
    phone: Arc<dyn PhoneLookup>,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!(username = %me.username(), "bot started");
    }
    tracing::info!(base = %cfg.registration_api_base, "registration lookups enabled");
    let remote_phone = cfg.phone_api_provider.is_some() && cfg.phone_api_key.is_some();
    tracing::info!(remote_phone, "phone lookups enabled");

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        cfg,
        messenger,
        registry,
        phone,
    });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
