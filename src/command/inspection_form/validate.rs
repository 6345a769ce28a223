// src/command/inspection_form/validate.rs

use crate::checklist::catalog::InspectionModule;
use crate::checklist::select::items_for_section;
use crate::command::inspection_form::types::{
    InspectionRecord, SignatureRole, TextField, ValidationErrors, KEY_RATE, KEY_REMARKS,
    SECTION_CHECKLIST_FIRST, SECTION_CHECKLIST_LAST, SECTION_DETAILS, SECTION_REVIEW,
};

/// Decide whether the record may leave the given section. Returns the set of
/// offending field/item keys; empty means admissible. Failures are data for
/// the caller to render inline, never errors in the `Result` sense.
pub fn validate_section(
    section: usize,
    module: InspectionModule,
    record: &InspectionRecord,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match section {
        SECTION_DETAILS => {
            for field in details_required_fields(module) {
                if record.text_field(field).trim().is_empty() {
                    errors.insert(field.key().to_string());
                }
            }
        }

        SECTION_CHECKLIST_FIRST..=SECTION_CHECKLIST_LAST => {
            for item in items_for_section(module, section) {
                if !record.item_status.contains_key(item.id) {
                    errors.insert(item.id.to_string());
                }
            }
        }

        SECTION_REVIEW => {
            if record.remarks.trim().is_empty() {
                errors.insert(KEY_REMARKS.to_string());
            }
            if record.rate == 0 {
                errors.insert(KEY_RATE.to_string());
            }
            for role in [SignatureRole::Inspector, SignatureRole::Driver] {
                let missing = record
                    .signature(role)
                    .map(|s| s.is_empty())
                    .unwrap_or(true);
                if missing {
                    errors.insert(role.key().to_string());
                }
            }
        }

        // Photos are optional; the terminal section has no inputs.
        _ => {}
    }

    errors
}

/// Required identity fields for section 0. Job card applies to every module
/// except general cargo.
pub fn details_required_fields(module: InspectionModule) -> Vec<TextField> {
    let mut fields = vec![
        TextField::TruckNo,
        TextField::TrailerNo,
        TextField::DriverName,
        TextField::Location,
        TextField::Odometer,
    ];
    if module.requires_job_card() {
        fields.push(TextField::JobCard);
    }
    fields
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::select::items_for_section;
    use crate::command::inspection_form::types::{ItemStatus, SECTION_CONFIRM, SECTION_PHOTOS};

    fn filled_details(module: InspectionModule) -> InspectionRecord {
        InspectionRecord {
            truck_no: "ZM1234".to_string(),
            trailer_no: "TR99".to_string(),
            job_card: if module.requires_job_card() {
                "JC-1001".to_string()
            } else {
                String::new()
            },
            driver_name: "John Phiri".to_string(),
            location: "Lusaka".to_string(),
            odometer: "12000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn details_empty_record_reports_exactly_the_empty_fields() {
        let record = InspectionRecord::default();
        let errors = validate_section(SECTION_DETAILS, InspectionModule::General, &record);

        let expected: ValidationErrors = ["truck_no", "trailer_no", "driver_name", "location", "odometer"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn details_general_passes_without_job_card() {
        let record = filled_details(InspectionModule::General);
        let errors = validate_section(SECTION_DETAILS, InspectionModule::General, &record);
        assert!(errors.is_empty());
    }

    #[test]
    fn details_petroleum_requires_job_card() {
        let mut record = filled_details(InspectionModule::Petroleum);
        record.job_card.clear();

        let errors = validate_section(SECTION_DETAILS, InspectionModule::Petroleum, &record);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("job_card"));
    }

    #[test]
    fn details_whitespace_only_counts_as_empty() {
        let mut record = filled_details(InspectionModule::General);
        record.location = "   ".to_string();

        let errors = validate_section(SECTION_DETAILS, InspectionModule::General, &record);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("location"));
    }

    #[test]
    fn photos_and_confirm_sections_are_always_admissible() {
        let record = InspectionRecord::default();
        for module in InspectionModule::ALL {
            assert!(validate_section(SECTION_PHOTOS, module, &record).is_empty());
            assert!(validate_section(SECTION_CONFIRM, module, &record).is_empty());
        }
    }

    #[test]
    fn checklist_reports_every_unanswered_item() {
        for module in InspectionModule::ALL {
            for section in 2..=4 {
                let record = InspectionRecord::default();
                let errors = validate_section(section, module, &record);

                let expected: ValidationErrors = items_for_section(module, section)
                    .iter()
                    .map(|i| i.id.to_string())
                    .collect();
                assert_eq!(errors, expected, "{module:?} section {section}");
            }
        }
    }

    #[test]
    fn checklist_passes_once_every_item_has_a_status() {
        let module = InspectionModule::Acid;
        let mut record = InspectionRecord::default();

        for item in items_for_section(module, 3) {
            record
                .item_status
                .insert(item.id.to_string(), ItemStatus::Good);
        }

        assert!(validate_section(3, module, &record).is_empty());
    }

    #[test]
    fn checklist_nil_status_counts_as_answered() {
        let module = InspectionModule::General;
        let mut record = InspectionRecord::default();

        for item in items_for_section(module, 2) {
            record
                .item_status
                .insert(item.id.to_string(), ItemStatus::Nil);
        }

        assert!(validate_section(2, module, &record).is_empty());
    }

    #[test]
    fn review_empty_reports_all_four_fields() {
        let record = InspectionRecord::default();
        let errors = validate_section(SECTION_REVIEW, InspectionModule::General, &record);

        let expected: ValidationErrors =
            ["remarks", "rate", "inspector_signature", "driver_signature"]
                .iter()
                .map(|s| s.to_string())
                .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn review_passes_when_complete() {
        let record = InspectionRecord {
            remarks: "ok".to_string(),
            rate: 4,
            inspector_signature: Some("sig:abc".to_string()),
            driver_signature: Some("sig:def".to_string()),
            ..Default::default()
        };
        let errors = validate_section(SECTION_REVIEW, InspectionModule::General, &record);
        assert!(errors.is_empty());
    }

    #[test]
    fn review_empty_string_signature_is_missing() {
        let record = InspectionRecord {
            remarks: "ok".to_string(),
            rate: 4,
            inspector_signature: Some(String::new()),
            driver_signature: Some("sig:def".to_string()),
            ..Default::default()
        };
        let errors = validate_section(SECTION_REVIEW, InspectionModule::General, &record);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("inspector_signature"));
    }
}
