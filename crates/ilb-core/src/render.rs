//! Rendering of lookup reports into Telegram HTML.
//!
//! Telegram HTML supports only a small subset: `<b>`, `<i>`, `<code>`,
//! `<pre>`, `<a href="...">`. Everything user-controlled is escaped.
//!
//! The two renderers are deliberately asymmetric: phone output always shows
//! every labeled field (absent values become "Unknown"), registration output
//! suppresses lines for absent fields entirely. Both are total functions and
//! never return an empty string.

use crate::errors::LookupError;
use crate::report::{PhoneReport, RegistrationReport};

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn code(text: &str) -> String {
    format!("<code>{}</code>", escape_html(text))
}

fn or_unknown(value: Option<&str>) -> String {
    escape_html(value.unwrap_or("Unknown"))
}

fn code_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(v) => code(v),
        None => "Unknown".to_string(),
    }
}

pub fn render_phone(report: &PhoneReport) -> String {
    let yes_no = |flag: bool| if flag { "Yes ✅" } else { "No ❌" };

    let country_code = report
        .calling_code
        .map(|c| format!("+{c}"))
        .unwrap_or_else(|| "Unknown".to_string());
    let line_type = report
        .line_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let timezones = if report.timezones.is_empty() {
        "Unknown".to_string()
    } else {
        escape_html(&report.timezones.join(", "))
    };

    let lines = vec![
        "📞 <b>Phone Number Information</b>".to_string(),
        String::new(),
        "<b>Formatted Numbers:</b>".to_string(),
        format!(
            "• International: {}",
            code_or_unknown(report.international.as_deref())
        ),
        format!(
            "• National: {}",
            code_or_unknown(report.national.as_deref())
        ),
        format!("• E.164: {}", code_or_unknown(report.e164.as_deref())),
        String::new(),
        "<b>Details:</b>".to_string(),
        format!("🌍 Country: {}", or_unknown(report.country.as_deref())),
        format!("📱 Country Code: {country_code}"),
        format!("📡 Carrier: {}", or_unknown(report.carrier.as_deref())),
        format!("📞 Line Type: {line_type}"),
        format!("🕐 Timezone: {timezones}"),
        String::new(),
        "<b>Validation:</b>".to_string(),
        format!("✓ Valid: {}", yes_no(report.valid)),
        format!("✓ Possible: {}", yes_no(report.possible)),
    ];

    lines.join("\n")
}

pub fn render_registration(report: &RegistrationReport) -> String {
    let mut lines = vec![
        "🚗 <b>Vehicle Registration Details</b>".to_string(),
        String::new(),
        format!("🔢 <b>Registration:</b> {}", code(&report.code)),
    ];

    push_section(
        &mut lines,
        "🚗 <b>Ownership Details</b>",
        &[
            ("Owner", report.owner_name.as_deref()),
            ("Father/Spouse", report.father_name.as_deref()),
            ("Serial", report.owner_serial.as_deref()),
            ("Registration No", report.registration_number.as_deref()),
            ("RTO", report.registered_rto.as_deref()),
        ],
    );
    push_section(
        &mut lines,
        "🧰 <b>Vehicle Details</b>",
        &[
            ("Model", report.model_name.as_deref()),
            ("Maker", report.maker_model.as_deref()),
            ("Class", report.vehicle_class.as_deref()),
            ("Fuel", report.fuel_type.as_deref()),
            ("Norms", report.fuel_norms.as_deref()),
            ("Cubic Capacity", report.cubic_capacity.as_deref()),
            ("Seating", report.seating_capacity.as_deref()),
            ("Chassis No", report.chassis_number.as_deref()),
            ("Engine No", report.engine_number.as_deref()),
        ],
    );
    push_section(
        &mut lines,
        "📄 <b>Insurance &amp; PUC</b>",
        &[
            ("Insurance No", report.insurance_no.as_deref()),
            ("Insurance Company", report.insurance_company.as_deref()),
            ("Insurance Expiry", report.insurance_expiry.as_deref()),
            ("PUC No", report.puc_no.as_deref()),
            ("PUC Upto", report.puc_upto.as_deref()),
        ],
    );
    push_section(
        &mut lines,
        "🗓 <b>Important Dates</b>",
        &[
            ("Registration Date", report.registration_date.as_deref()),
            ("Fitness Upto", report.fitness_upto.as_deref()),
            ("Tax Upto", report.tax_upto.as_deref()),
            ("Vehicle Age", report.vehicle_age.as_deref()),
        ],
    );
    push_section(
        &mut lines,
        "🛍 <b>Other</b>",
        &[
            ("Financer", report.financer_name.as_deref()),
            ("Blacklist", report.blacklist_status.as_deref()),
        ],
    );

    if let Some(days) = report.expired_days.as_deref() {
        lines.push(String::new());
        lines.push(format!("⚠️ <b>Expired Days:</b> {}", escape_html(days)));
    }

    lines.join("\n")
}

/// Append a section header plus one bullet per present field. Sections with
/// no present fields are omitted entirely.
fn push_section(lines: &mut Vec<String>, header: &str, fields: &[(&str, Option<&str>)]) {
    let present: Vec<String> = fields
        .iter()
        .filter_map(|(label, value)| {
            value.map(|v| format!("• <b>{label}:</b> {}", escape_html(v)))
        })
        .collect();

    if present.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(header.to_string());
    lines.extend(present);
}

pub fn render_lookup_error(error: &LookupError) -> String {
    format!("❌ {}", escape_html(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::LineType;

    #[test]
    fn phone_render_is_total_with_everything_absent() {
        let html = render_phone(&PhoneReport::default());
        assert!(!html.is_empty());
        assert!(html.contains("Country: Unknown"));
        assert!(html.contains("Carrier: Unknown"));
        assert!(html.contains("Line Type: Unknown"));
        assert!(html.contains("Timezone: Unknown"));
        assert!(html.contains("Valid: No ❌"));
    }

    #[test]
    fn phone_render_shows_known_fields() {
        let report = PhoneReport {
            international: Some("+1 415-555-2671".to_string()),
            national: Some("(415) 555-2671".to_string()),
            e164: Some("+14155552671".to_string()),
            country: Some("United States".to_string()),
            calling_code: Some(1),
            carrier: None,
            line_type: Some(LineType::Mobile),
            timezones: vec!["America/Los_Angeles".to_string()],
            valid: true,
            possible: true,
        };
        let html = render_phone(&report);
        assert!(html.contains("United States"));
        assert!(html.contains("Mobile"));
        assert!(html.contains("<code>+14155552671</code>"));
        assert!(html.contains("Country Code: +1"));
        assert!(html.contains("America/Los_Angeles"));
        assert!(html.contains("Valid: Yes ✅"));
    }

    #[test]
    fn registration_render_suppresses_absent_sections() {
        let mut report = RegistrationReport::new("MH12DE1433");
        report.owner_name = Some("Test User".to_string());
        report.registered_rto = Some("Mumbai".to_string());

        let html = render_registration(&report);
        assert!(html.contains("Test User"));
        assert!(html.contains("Mumbai"));
        assert!(html.contains("<code>MH12DE1433</code>"));
        assert!(!html.contains("Insurance"));
        assert!(!html.contains("Vehicle Details"));
        assert!(!html.contains("Unknown"));
    }

    #[test]
    fn registration_render_is_total_with_everything_absent() {
        let html = render_registration(&RegistrationReport::new("MH12DE1433"));
        assert!(!html.is_empty());
        assert!(html.contains("MH12DE1433"));
    }

    #[test]
    fn registration_render_escapes_upstream_values() {
        let mut report = RegistrationReport::new("MH12DE1433");
        report.owner_name = Some("<b>bold</b> & co".to_string());
        let html = render_registration(&report);
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
    }

    #[test]
    fn expired_days_warning_is_appended() {
        let mut report = RegistrationReport::new("MH12DE1433");
        report.owner_name = Some("Test User".to_string());
        report.expired_days = Some("42".to_string());
        let html = render_registration(&report);
        assert!(html.contains("Expired Days:</b> 42"));
    }

    #[test]
    fn lookup_error_render_never_empty() {
        let html = render_lookup_error(&LookupError::NotConfigured);
        assert!(html.starts_with("❌ "));
        assert!(html.len() > 2);
    }
}
