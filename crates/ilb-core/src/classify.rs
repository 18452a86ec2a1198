//! Input classification: registration code vs phone number vs neither.

use regex::Regex;

/// What a raw inbound text denotes, with the normalized candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Vehicle registration code, uppercased with whitespace stripped.
    Registration(String),
    /// Phone number candidate, trimmed but otherwise untouched.
    Phone(String),
    Unrecognized,
}

/// Classify one inbound text. Pure: no I/O, no failure modes.
///
/// The registration pattern is checked first since it is the more specific
/// one; a bare `MH12DE1433` would otherwise satisfy the 7-digit phone rule.
pub fn classify(text: &str) -> Classification {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Classification::Unrecognized;
    }

    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    let registration_re =
        Regex::new(r"^[A-Z]{2}\d{1,2}[A-Z0-9]{1,2}\d{1,4}$").expect("valid regex");
    if registration_re.is_match(&compact) {
        return Classification::Registration(compact);
    }

    let phone_re = Regex::new(r"^\+?[\d\s\-()]+$").expect("valid regex");
    if phone_re.is_match(trimmed) {
        let digits = trimmed.chars().filter(char::is_ascii_digit).count();
        if digits >= 7 {
            return Classification::Phone(trimmed.to_string());
        }
    }

    Classification::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_codes_match() {
        assert_eq!(
            classify("MH12DE1433"),
            Classification::Registration("MH12DE1433".to_string())
        );
        assert_eq!(
            classify("ka01ab1234"),
            Classification::Registration("KA01AB1234".to_string())
        );
        // Single-digit district, single trailing digit.
        assert_eq!(
            classify("DL1C1"),
            Classification::Registration("DL1C1".to_string())
        );
    }

    #[test]
    fn registration_strips_whitespace() {
        assert_eq!(
            classify("  MH 12 DE 1433 "),
            Classification::Registration("MH12DE1433".to_string())
        );
    }

    #[test]
    fn registration_wins_over_phone_digit_rule() {
        // Eight digits would satisfy the >=7-digit phone rule on their own,
        // but the code pattern is more specific and is checked first.
        assert_eq!(
            classify("MH12341234"),
            Classification::Registration("MH12341234".to_string())
        );
    }

    #[test]
    fn phone_numbers_match() {
        assert_eq!(
            classify("+14155552671"),
            Classification::Phone("+14155552671".to_string())
        );
        assert_eq!(
            classify("+1 (555) 123-4567"),
            Classification::Phone("+1 (555) 123-4567".to_string())
        );
        assert_eq!(
            classify("9876543210"),
            Classification::Phone("9876543210".to_string())
        );
    }

    #[test]
    fn short_digit_runs_are_unrecognized() {
        assert_eq!(classify("123456"), Classification::Unrecognized);
        assert_eq!(classify("+12 34"), Classification::Unrecognized);
    }

    #[test]
    fn free_text_is_unrecognized() {
        assert_eq!(classify("hello world"), Classification::Unrecognized);
        assert_eq!(classify(""), Classification::Unrecognized);
        assert_eq!(classify("   "), Classification::Unrecognized);
        assert_eq!(classify("call me maybe +1"), Classification::Unrecognized);
    }
}
