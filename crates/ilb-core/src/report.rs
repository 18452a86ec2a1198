//! Lookup result records.
//!
//! Both records are plain data: adapters fill them, the renderer reads them.
//! Every non-flag field is optional; absence is a normal state, not an error.

use std::fmt;

/// Service category of a telephone number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LineType::FixedLine => "Fixed Line",
            LineType::Mobile => "Mobile",
            LineType::FixedLineOrMobile => "Fixed Line or Mobile",
            LineType::TollFree => "Toll Free",
            LineType::PremiumRate => "Premium Rate",
            LineType::SharedCost => "Shared Cost",
            LineType::Voip => "VoIP",
            LineType::PersonalNumber => "Personal Number",
            LineType::Pager => "Pager",
            LineType::Uan => "UAN",
            LineType::Voicemail => "Voicemail",
            LineType::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Everything we can derive for one telephone number.
#[derive(Clone, Debug, Default)]
pub struct PhoneReport {
    pub international: Option<String>,
    pub national: Option<String>,
    pub e164: Option<String>,
    pub country: Option<String>,
    pub calling_code: Option<u16>,
    pub carrier: Option<String>,
    pub line_type: Option<LineType>,
    pub timezones: Vec<String>,
    pub valid: bool,
    pub possible: bool,
}

/// Everything the registry returned for one registration code.
///
/// `code` is the queried (normalized) code, always present.
#[derive(Clone, Debug, Default)]
pub struct RegistrationReport {
    pub code: String,

    // Ownership
    pub owner_name: Option<String>,
    pub father_name: Option<String>,
    pub owner_serial: Option<String>,
    pub registration_number: Option<String>,
    pub registered_rto: Option<String>,

    // Vehicle
    pub model_name: Option<String>,
    pub maker_model: Option<String>,
    pub vehicle_class: Option<String>,
    pub fuel_type: Option<String>,
    pub fuel_norms: Option<String>,
    pub cubic_capacity: Option<String>,
    pub seating_capacity: Option<String>,
    pub chassis_number: Option<String>,
    pub engine_number: Option<String>,

    // Insurance & PUC
    pub insurance_no: Option<String>,
    pub insurance_company: Option<String>,
    pub insurance_expiry: Option<String>,
    pub puc_no: Option<String>,
    pub puc_upto: Option<String>,

    // Dates
    pub registration_date: Option<String>,
    pub fitness_upto: Option<String>,
    pub tax_upto: Option<String>,
    pub vehicle_age: Option<String>,

    // Other
    pub financer_name: Option<String>,
    pub blacklist_status: Option<String>,
    pub expired_days: Option<String>,
}

impl RegistrationReport {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Whether the upstream body carried any recognizable ownership or
    /// registration identity. Bodies without one are treated as "not found".
    pub fn has_identity(&self) -> bool {
        self.owner_name.is_some() || self.registration_number.is_some()
    }
}
