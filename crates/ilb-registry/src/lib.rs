//! Vehicle-registration lookup adapter.
//!
//! Issues a single GET against the configured lookup endpoint and maps the
//! JSON body onto an `ilb-core` `RegistrationReport`. Every failure mode is
//! converted into a `LookupError` here; callers never see a transport error.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use ilb_core::{
    extract,
    ports::RegistrationLookup,
    report::RegistrationReport,
    LookupError,
};

#[derive(Clone, Debug)]
pub struct RegistryClient {
    base: String,
    http: reqwest::Client,
}

impl RegistryClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            base: base.into(),
            http,
        }
    }

    fn url_for(&self, code: &str) -> String {
        format!("{}{}", self.base, utf8_percent_encode(code, NON_ALPHANUMERIC))
    }
}

#[async_trait]
impl RegistrationLookup for RegistryClient {
    async fn lookup(&self, code: &str) -> Result<RegistrationReport, LookupError> {
        let code = normalize(code);
        let url = self.url_for(&code);

        let resp = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(code = %code, error = %e, "registration lookup request failed");
            LookupError::Transport {
                detail: e.to_string(),
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(code = %code, %status, "registration lookup returned error status");
            return Err(LookupError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: Value = resp.json().await.map_err(|e| {
            tracing::warn!(code = %code, error = %e, "registration lookup body was not JSON");
            LookupError::Transport {
                detail: e.to_string(),
            }
        })?;

        decode_body(&code, &body)
    }
}

/// Uppercase and strip whitespace. The classifier already normalizes, but the
/// adapter contract does not depend on who calls it.
fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Map a 2xx JSON body onto a report, honoring the `data` envelope and the
/// upstream `error` field.
fn decode_body(code: &str, body: &Value) -> Result<RegistrationReport, LookupError> {
    let payload = extract::unwrap_data(body);

    if let Some(message) = payload.get("error").and_then(Value::as_str) {
        return Err(LookupError::Api(message.to_string()));
    }

    let report = extract::registration_from_json(code, payload);
    if !report.has_identity() {
        return Err(LookupError::NotFound {
            code: code.to_string(),
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_appends_encoded_code() {
        let client = RegistryClient::new(
            "https://vvvin-ng.vercel.app/lookup?rc=",
            Duration::from_secs(12),
        );
        assert_eq!(
            client.url_for("MH12DE1433"),
            "https://vvvin-ng.vercel.app/lookup?rc=MH12DE1433"
        );
        // Anything outside [A-Za-z0-9] gets percent-encoded.
        assert_eq!(
            client.url_for("MH12 DE"),
            "https://vvvin-ng.vercel.app/lookup?rc=MH12%20DE"
        );
    }

    #[test]
    fn normalizes_before_query() {
        assert_eq!(normalize(" mh 12 de 1433 "), "MH12DE1433");
    }

    #[test]
    fn decodes_wrapped_body() {
        let body = json!({"data": {"owner_name": "Ramesh Kumar"}});
        let report = decode_body("MH12DE1433", &body).unwrap();
        assert_eq!(report.owner_name.as_deref(), Some("Ramesh Kumar"));
        assert_eq!(report.code, "MH12DE1433");
    }

    #[test]
    fn surfaces_upstream_error_field_verbatim() {
        let body = json!({"error": "quota exhausted"});
        let err = decode_body("MH12DE1433", &body).unwrap_err();
        assert!(matches!(err, LookupError::Api(ref m) if m == "quota exhausted"));
    }

    #[test]
    fn body_without_identity_is_not_found() {
        let body = json!({"status": "ok"});
        let err = decode_body("MH12DE1433", &body).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { ref code } if code == "MH12DE1433"));
    }

    #[test]
    fn nested_body_decodes_like_flat() {
        let body = json!({
            "Ownership Details": {"Owner Name": "Test User", "Registered RTO": "Mumbai"}
        });
        let report = decode_body("MH12DE1433", &body).unwrap();
        assert_eq!(report.owner_name.as_deref(), Some("Test User"));
        assert_eq!(report.registered_rto.as_deref(), Some("Mumbai"));
    }
}
