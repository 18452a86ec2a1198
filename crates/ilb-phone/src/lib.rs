//! Telephone-number lookup adapter.
//!
//! Parsing, validation and formatting run locally against the numbering-plan
//! dataset bundled with the `phonenumber` crate; no network call is needed
//! for the primary path. When an operator configures a remote validation
//! provider, its answer enriches the local report (carrier, line type) but a
//! remote failure never fails the lookup.

use std::time::Duration;

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};

use ilb_core::{
    ports::PhoneLookup,
    report::{LineType, PhoneReport},
    LookupError,
};

const REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct PhoneInspector {
    remote: Option<NumverifyClient>,
}

impl PhoneInspector {
    pub fn new(remote: Option<NumverifyClient>) -> Self {
        Self { remote }
    }

    /// Build from the configured provider name + key. Only "numverify" is
    /// implemented; anything else runs local-only.
    pub fn from_config(provider: Option<&str>, key: Option<&str>) -> Self {
        let remote = match (provider, key) {
            (Some("numverify"), Some(key)) => Some(NumverifyClient::new(key)),
            _ => None,
        };
        Self::new(remote)
    }

    /// Parse and classify a candidate locally. Pure apart from the parse.
    pub fn inspect(&self, candidate: &str) -> Result<PhoneReport, LookupError> {
        let parsed = phonenumber::parse(None, candidate).map_err(|e| {
            tracing::debug!(error = %e, "phone candidate did not parse");
            LookupError::MissingCallingCode
        })?;

        let calling_code = parsed.country().code();
        let e164 = parsed.format().mode(Mode::E164).to_string();

        Ok(PhoneReport {
            international: Some(parsed.format().mode(Mode::International).to_string()),
            national: Some(parsed.format().mode(Mode::National).to_string()),
            possible: plausible_length(&e164, calling_code),
            e164: Some(e164),
            country: country_name(&parsed),
            calling_code: Some(calling_code),
            carrier: None,
            line_type: Some(line_type(&parsed)),
            timezones: Vec::new(),
            valid: phonenumber::is_valid(&parsed),
        })
    }

    /// Query the configured remote provider for one E.164 number.
    ///
    /// Without configuration this returns `NotConfigured` and performs no
    /// network call.
    pub async fn remote_validate(&self, e164: &str) -> Result<RemoteValidation, LookupError> {
        match &self.remote {
            Some(client) => client.validate(e164).await,
            None => Err(LookupError::NotConfigured),
        }
    }
}

#[async_trait]
impl PhoneLookup for PhoneInspector {
    async fn lookup(&self, candidate: &str) -> Result<PhoneReport, LookupError> {
        let mut report = self.inspect(candidate)?;

        if self.remote.is_some() {
            let e164 = report.e164.clone().unwrap_or_else(|| candidate.to_string());
            match self.remote_validate(&e164).await {
                Ok(remote) => merge_remote(&mut report, remote),
                Err(e) => {
                    tracing::warn!(error = %e, "remote phone validation failed; using local parse only");
                }
            }
        }

        Ok(report)
    }
}

/// Length plausibility of the national significant number (2..=17 digits),
/// a weaker check than full numbering-plan validity.
fn plausible_length(e164: &str, calling_code: u16) -> bool {
    let digits = e164.trim_start_matches('+').len();
    let national = digits.saturating_sub(calling_code.to_string().len());
    (2..=17).contains(&national)
}

fn country_name(parsed: &PhoneNumber) -> Option<String> {
    let id = parsed.country().id()?;
    let alpha2: &str = id.as_ref();
    match isocountry::CountryCode::for_alpha2(alpha2) {
        Ok(country) => Some(country.name().to_string()),
        Err(_) => Some(alpha2.to_string()),
    }
}

fn line_type(parsed: &PhoneNumber) -> LineType {
    use phonenumber::Type;

    match parsed.number_type(&phonenumber::metadata::DATABASE) {
        Type::FixedLine => LineType::FixedLine,
        Type::Mobile => LineType::Mobile,
        Type::FixedLineOrMobile => LineType::FixedLineOrMobile,
        Type::TollFree => LineType::TollFree,
        Type::PremiumRate => LineType::PremiumRate,
        Type::SharedCost => LineType::SharedCost,
        Type::Voip => LineType::Voip,
        Type::PersonalNumber => LineType::PersonalNumber,
        Type::Pager => LineType::Pager,
        Type::Uan => LineType::Uan,
        Type::Voicemail => LineType::Voicemail,
        _ => LineType::Unknown,
    }
}

/// Fill gaps in the local report with the provider's answer. The local parse
/// stays authoritative for formats and validity.
fn merge_remote(report: &mut PhoneReport, remote: RemoteValidation) {
    if report.carrier.is_none() {
        report.carrier = remote.carrier.filter(|c| !c.trim().is_empty());
    }
    if report.country.is_none() {
        report.country = remote.country_name.filter(|c| !c.trim().is_empty());
    }
    if matches!(report.line_type, None | Some(LineType::Unknown)) {
        if let Some(kind) = remote.line_type.as_deref().and_then(remote_line_type) {
            report.line_type = Some(kind);
        }
    }
}

fn remote_line_type(label: &str) -> Option<LineType> {
    let kind = match label.trim().to_lowercase().as_str() {
        "mobile" => LineType::Mobile,
        "landline" | "fixed_line" => LineType::FixedLine,
        "fixed_line_or_mobile" => LineType::FixedLineOrMobile,
        "toll_free" => LineType::TollFree,
        "premium_rate" => LineType::PremiumRate,
        "shared_cost" => LineType::SharedCost,
        "voip" => LineType::Voip,
        "personal_number" => LineType::PersonalNumber,
        "pager" => LineType::Pager,
        "uan" => LineType::Uan,
        "voicemail" => LineType::Voicemail,
        _ => return None,
    };
    Some(kind)
}

/// The subset of the provider response we use.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RemoteValidation {
    pub valid: Option<bool>,
    #[serde(alias = "country")]
    pub country_name: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NumverifyClient {
    key: String,
    http: reqwest::Client,
}

impl NumverifyClient {
    const ENDPOINT: &'static str = "http://apilayer.net/api/validate";

    pub fn new(key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REMOTE_TIMEOUT)
            .build()
            .expect("reqwest client build");
        Self {
            key: key.into(),
            http,
        }
    }

    pub async fn validate(&self, e164: &str) -> Result<RemoteValidation, LookupError> {
        let resp = self
            .http
            .get(Self::ENDPOINT)
            .query(&[("access_key", self.key.as_str()), ("number", e164)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "numverify request failed");
                LookupError::Transport {
                    detail: e.to_string(),
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "numverify returned error status");
            return Err(LookupError::Upstream {
                status: status.as_u16(),
            });
        }

        resp.json::<RemoteValidation>().await.map_err(|e| {
            tracing::warn!(error = %e, "numverify body was not the expected JSON");
            LookupError::Transport {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_only() -> PhoneInspector {
        PhoneInspector::new(None)
    }

    #[test]
    fn parses_us_number() {
        let report = local_only().inspect("+14155552671").unwrap();
        assert!(report.valid);
        assert!(report.possible);
        assert_eq!(report.e164.as_deref(), Some("+14155552671"));
        assert_eq!(report.calling_code, Some(1));
        let country = report.country.unwrap();
        assert!(country.contains("United States"), "got {country}");
    }

    #[test]
    fn classifies_indian_mobile() {
        let report = local_only().inspect("+919876543210").unwrap();
        assert!(report.valid);
        assert_eq!(report.line_type, Some(LineType::Mobile));
        assert_eq!(report.country.as_deref(), Some("India"));
        assert_eq!(report.calling_code, Some(91));
    }

    #[test]
    fn accepts_formatting_characters() {
        let report = local_only().inspect("+1 (415) 555-2671").unwrap();
        assert_eq!(report.e164.as_deref(), Some("+14155552671"));
    }

    #[test]
    fn missing_calling_code_is_rejected() {
        let err = local_only().inspect("4155552671").unwrap_err();
        assert!(matches!(err, LookupError::MissingCallingCode));
    }

    #[tokio::test]
    async fn remote_path_without_key_is_not_configured() {
        let err = local_only().remote_validate("+14155552671").await.unwrap_err();
        assert!(matches!(err, LookupError::NotConfigured));
    }

    #[test]
    fn length_plausibility_bounds() {
        assert!(plausible_length("+14155552671", 1));
        assert!(!plausible_length("+1", 1));
    }

    #[test]
    fn remote_line_type_labels_map() {
        assert_eq!(remote_line_type("mobile"), Some(LineType::Mobile));
        assert_eq!(remote_line_type("landline"), Some(LineType::FixedLine));
        assert_eq!(remote_line_type("satellite"), None);
    }

    #[test]
    fn merge_fills_only_gaps() {
        let mut report = PhoneReport {
            country: Some("India".to_string()),
            line_type: Some(LineType::Mobile),
            ..PhoneReport::default()
        };
        merge_remote(
            &mut report,
            RemoteValidation {
                valid: Some(true),
                country_name: Some("Bharat".to_string()),
                carrier: Some("Airtel".to_string()),
                line_type: Some("landline".to_string()),
            },
        );
        assert_eq!(report.country.as_deref(), Some("India"));
        assert_eq!(report.line_type, Some(LineType::Mobile));
        assert_eq!(report.carrier.as_deref(), Some("Airtel"));
    }
}
