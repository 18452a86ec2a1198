use std::sync::Arc;

use ilb_core::{
    config::Config,
    ports::{PhoneLookup, RegistrationLookup},
};
use ilb_phone::PhoneInspector;
use ilb_registry::RegistryClient;

#[tokio::main]
async fn main() -> Result<(), ilb_core::Error> {
    ilb_core::logging::init("ilb");

    let cfg = Arc::new(Config::load()?);

    let registry: Arc<dyn RegistrationLookup> = Arc::new(RegistryClient::new(
        cfg.registration_api_base.clone(),
        cfg.lookup_timeout,
    ));
    let phone: Arc<dyn PhoneLookup> = Arc::new(PhoneInspector::from_config(
        cfg.phone_api_provider.as_deref(),
        cfg.phone_api_key.as_deref(),
    ));

    ilb_telegram::router::run_polling(cfg, registry, phone)
        .await
        .map_err(|e| ilb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
