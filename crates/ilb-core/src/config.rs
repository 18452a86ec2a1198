use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Default public registration-lookup endpoint; the code is appended as-is.
pub const DEFAULT_RC_API_BASE: &str = "https://vvvin-ng.vercel.app/lookup?rc=";

const MIN_LOOKUP_TIMEOUT_MS: u64 = 10_000;
const MAX_LOOKUP_TIMEOUT_MS: u64 = 12_000;

/// Typed, immutable process-wide configuration.
///
/// Built once at startup from the environment and shared via `Arc`; nothing
/// mutates it afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,

    /// Base URL the normalized registration code is appended to.
    pub registration_api_base: String,

    /// Optional remote phone-validation provider ("numverify") and key.
    pub phone_api_provider: Option<String>,
    pub phone_api_key: Option<String>,

    /// Upstream HTTP timeout, clamped to the 10-12 s band.
    pub lookup_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let registration_api_base =
            env_str("RC_API_BASE").unwrap_or_else(|| DEFAULT_RC_API_BASE.to_string());

        let phone_api_provider = env_str("PHONE_API_PROVIDER")
            .and_then(non_empty)
            .map(|s| s.trim().to_lowercase());
        let phone_api_key = env_str("PHONE_API_KEY").and_then(non_empty);

        let lookup_timeout_ms = env_u64("LOOKUP_TIMEOUT_MS")
            .unwrap_or(MAX_LOOKUP_TIMEOUT_MS)
            .clamp(MIN_LOOKUP_TIMEOUT_MS, MAX_LOOKUP_TIMEOUT_MS);
        let lookup_timeout = Duration::from_millis(lookup_timeout_ms);

        Ok(Self {
            telegram_bot_token,
            registration_api_base,
            phone_api_provider,
            phone_api_key,
            lookup_timeout,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
