/// Core error type for the bot.
///
/// Adapter crates should map their specific errors into this type so the bot
/// core can handle failures consistently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single lookup, carried back to the user.
///
/// `Display` is the user-facing message. Root-cause detail (transport errors,
/// HTTP status codes) stays in the variant fields and is logged at the
/// adapter boundary; it must never reach the chat.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The candidate could not be parsed as a phone number.
    #[error("Could not parse that phone number. Make sure to include a country calling code, e.g. +91, +1, +44.")]
    MissingCallingCode,

    /// The registry returned a body with no recognizable ownership fields.
    #[error("No information found for {code}. Please verify the registration number and try again.")]
    NotFound { code: String },

    /// The registry answered with a non-success HTTP status.
    #[error("Lookup API error. Please try again later.")]
    Upstream { status: u16 },

    /// The registry reported an error of its own; surfaced verbatim.
    #[error("{0}")]
    Api(String),

    /// Network failure, timeout, or malformed JSON from the registry.
    #[error("Could not fetch vehicle information. Please check the registration number and try again.")]
    Transport { detail: String },

    /// The optional remote phone-validation path was invoked without a key.
    #[error("Phone provider lookup is not configured.")]
    NotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_error_messages_hide_detail() {
        let err = LookupError::Transport {
            detail: "connection refused (os error 111)".to_string(),
        };
        assert!(!err.to_string().contains("os error"));

        let err = LookupError::Upstream { status: 500 };
        assert!(!err.to_string().contains("500"));
    }

    #[test]
    fn not_found_names_the_code() {
        let err = LookupError::NotFound {
            code: "MH12DE1433".to_string(),
        };
        assert!(err.to_string().contains("MH12DE1433"));
    }

    #[test]
    fn api_error_is_verbatim() {
        let err = LookupError::Api("rate limit exceeded".to_string());
        assert_eq!(err.to_string(), "rate limit exceeded");
    }
}
