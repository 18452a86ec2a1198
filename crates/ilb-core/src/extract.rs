//! Mapping of upstream registry JSON onto `RegistrationReport`.
//!
//! The upstream service has shipped at least two body shapes: a flat object
//! with snake_case keys, and a grouped object whose category sub-objects
//! (`Ownership Details`, `Vehicle Details`, ...) hold Title Case keys. Both
//! must land on the same record, so extraction is table-driven: every logical
//! field has an ordered candidate key list, tried against the flattened body,
//! first present wins. New upstream spellings only ever touch the table.

use serde_json::{Map, Value};

use crate::report::RegistrationReport;

type Setter = fn(&mut RegistrationReport, String);

const FIELDS: &[(&[&str], Setter)] = &[
    (
        &["owner_name", "Owner Name", "Owner", "owner"],
        |r, v| r.owner_name = Some(v),
    ),
    (
        &["father_name", "Father Name", "Father's Name"],
        |r, v| r.father_name = Some(v),
    ),
    (
        &["owner_serial_no", "Owner Serial No", "Serial No"],
        |r, v| r.owner_serial = Some(v),
    ),
    (
        &[
            "registration_number",
            "Registration No",
            "Registration number",
            "reg_no",
        ],
        |r, v| r.registration_number = Some(v),
    ),
    (
        &["registered_rto", "Registered RTO", "RTO"],
        |r, v| r.registered_rto = Some(v),
    ),
    (
        &["model_name", "Model Name", "modal_name", "Modal Name"],
        |r, v| r.model_name = Some(v),
    ),
    (
        &["maker_model", "Maker Model"],
        |r, v| r.maker_model = Some(v),
    ),
    (
        &["vehicle_class", "Vehicle Class"],
        |r, v| r.vehicle_class = Some(v),
    ),
    (&["fuel_type", "Fuel Type"], |r, v| r.fuel_type = Some(v)),
    (&["fuel_norms", "Fuel Norms"], |r, v| r.fuel_norms = Some(v)),
    (
        &["cubic_capacity", "Cubic Capacity"],
        |r, v| r.cubic_capacity = Some(v),
    ),
    (
        &["seating_capacity", "Seating Capacity"],
        |r, v| r.seating_capacity = Some(v),
    ),
    (
        &["chassis_number", "Chassis Number", "Chassis No"],
        |r, v| r.chassis_number = Some(v),
    ),
    (
        &["engine_number", "Engine Number", "Engine No"],
        |r, v| r.engine_number = Some(v),
    ),
    (
        &["insurance_no", "Insurance No"],
        |r, v| r.insurance_no = Some(v),
    ),
    (
        &["insurance_company", "Insurance Company"],
        |r, v| r.insurance_company = Some(v),
    ),
    (
        &["insurance_expiry", "Insurance Expiry", "Insurance Upto"],
        |r, v| r.insurance_expiry = Some(v),
    ),
    (&["puc_no", "PUC No"], |r, v| r.puc_no = Some(v)),
    (&["puc_upto", "PUC Upto"], |r, v| r.puc_upto = Some(v)),
    (
        &["registration_date", "Registration Date"],
        |r, v| r.registration_date = Some(v),
    ),
    (
        &["fitness_upto", "Fitness Upto"],
        |r, v| r.fitness_upto = Some(v),
    ),
    (&["tax_upto", "Tax Upto"], |r, v| r.tax_upto = Some(v)),
    (
        &["vehicle_age", "Vehicle Age"],
        |r, v| r.vehicle_age = Some(v),
    ),
    (
        &["financer_name", "Financer Name", "Financer"],
        |r, v| r.financer_name = Some(v),
    ),
    (
        &["blacklist_status", "Blacklist Status"],
        |r, v| r.blacklist_status = Some(v),
    ),
    (
        &["expired_days", "Expired Days"],
        |r, v| r.expired_days = Some(v),
    ),
];

/// Unwrap a `{ "data": {...} }` envelope when present and non-empty.
pub fn unwrap_data(body: &Value) -> &Value {
    match body.get("data") {
        Some(data) if !data.is_null() => match data.as_object() {
            Some(obj) if obj.is_empty() => body,
            _ => data,
        },
        _ => body,
    }
}

/// Build a report for `code` from an already-unwrapped upstream body.
pub fn registration_from_json(code: &str, body: &Value) -> RegistrationReport {
    let flat = flatten(body);
    let mut report = RegistrationReport::new(code);

    for (keys, set) in FIELDS {
        for key in *keys {
            if let Some(text) = flat.get(*key).and_then(scalar_text) {
                set(&mut report, text);
                break;
            }
        }
    }

    report
}

/// Merge top-level scalars and the entries of category sub-objects into one
/// map. Top-level keys win over nested ones on collision.
fn flatten(body: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    let Some(obj) = body.as_object() else {
        return flat;
    };

    for (key, value) in obj {
        if !value.is_object() {
            flat.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
    for value in obj.values() {
        if let Some(nested) = value.as_object() {
            for (key, inner) in nested {
                flat.entry(key.clone()).or_insert_with(|| inner.clone());
            }
        }
    }

    flat
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        return None;
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_data_envelope() {
        let body = json!({"data": {"owner_name": "Ramesh Kumar"}});
        let report = registration_from_json("MH12DE1433", unwrap_data(&body));
        assert_eq!(report.owner_name.as_deref(), Some("Ramesh Kumar"));
    }

    #[test]
    fn empty_data_envelope_falls_back_to_body() {
        let body = json!({"data": {}, "owner_name": "Ramesh Kumar"});
        let report = registration_from_json("MH12DE1433", unwrap_data(&body));
        assert_eq!(report.owner_name.as_deref(), Some("Ramesh Kumar"));
    }

    #[test]
    fn flat_snake_case_body() {
        let body = json!({
            "owner_name": "Test User",
            "registration_number": "MH12DE1433",
            "fuel_type": "PETROL",
            "seating_capacity": 5
        });
        let report = registration_from_json("MH12DE1433", &body);
        assert_eq!(report.owner_name.as_deref(), Some("Test User"));
        assert_eq!(report.registration_number.as_deref(), Some("MH12DE1433"));
        assert_eq!(report.fuel_type.as_deref(), Some("PETROL"));
        assert_eq!(report.seating_capacity.as_deref(), Some("5"));
        assert!(report.insurance_no.is_none());
    }

    #[test]
    fn nested_title_case_body() {
        let body = json!({
            "Ownership Details": {
                "Owner Name": "Test User",
                "Father's Name": "Sr User",
                "Registered RTO": "Mumbai"
            },
            "Vehicle Details": {
                "Maker Model": "SWIFT VDI",
                "Fuel Type": "DIESEL"
            },
            "Important Dates & Validity": {
                "Tax Upto": "2027-03-31"
            }
        });
        let report = registration_from_json("MH12DE1433", &body);
        assert_eq!(report.owner_name.as_deref(), Some("Test User"));
        assert_eq!(report.father_name.as_deref(), Some("Sr User"));
        assert_eq!(report.registered_rto.as_deref(), Some("Mumbai"));
        assert_eq!(report.maker_model.as_deref(), Some("SWIFT VDI"));
        assert_eq!(report.fuel_type.as_deref(), Some("DIESEL"));
        assert_eq!(report.tax_upto.as_deref(), Some("2027-03-31"));
    }

    #[test]
    fn first_present_synonym_wins() {
        let body = json!({
            "owner_name": "Snake Case",
            "Owner Name": "Title Case"
        });
        let report = registration_from_json("MH12DE1433", &body);
        assert_eq!(report.owner_name.as_deref(), Some("Snake Case"));
    }

    #[test]
    fn blank_values_are_treated_as_absent() {
        let body = json!({"owner_name": "   ", "Owner": "Real Owner"});
        let report = registration_from_json("MH12DE1433", &body);
        assert_eq!(report.owner_name.as_deref(), Some("Real Owner"));
    }

    #[test]
    fn no_identity_fields_means_empty_report() {
        let body = json!({"status": "ok", "message": "nothing here"});
        let report = registration_from_json("MH12DE1433", &body);
        assert!(!report.has_identity());
    }
}
