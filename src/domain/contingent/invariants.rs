// src/domain/contingent/invariants.rs

use super::entity::Contingent;
use crate::domain::FieldFailure;

/// Validates all Contingent field-shape rules.
pub fn validate_contingent(contingent: &Contingent) -> Vec<FieldFailure> {
    let mut failures = Vec::new();

    if contingent.code.trim().is_empty() {
        failures.push(FieldFailure::new(
            "Code",
            "You cannot leave the contingent code blank.",
        ));
    }

    if contingent.name.trim().is_empty() {
        failures.push(FieldFailure::new(
            "Name",
            "You cannot leave the contingent name blank.",
        ));
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_contingent_passes() {
        let contingent = Contingent::new("CAN", "Canada");
        assert!(validate_contingent(&contingent).is_empty());
    }

    #[test]
    fn blank_fields_all_reported() {
        let contingent = Contingent::new("", "  ");
        let failures = validate_contingent(&contingent);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].field, "Code");
        assert_eq!(failures[1].field, "Name");
    }
}
