// src/domain/sport/invariants.rs

use super::entity::Sport;
use crate::domain::FieldFailure;
use regex::Regex;
use std::sync::OnceLock;

const NAME_MAX_LEN: usize = 50;

fn code_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[A-Z]{3}$").expect("sport code pattern"))
}

/// Validates all Sport field-shape rules.
///
/// Rules are evaluated independently; every failure is reported.
pub fn validate_sport(sport: &Sport) -> Vec<FieldFailure> {
    let mut failures = Vec::new();

    if sport.code.trim().is_empty() {
        failures.push(FieldFailure::new(
            "Code",
            "You cannot leave the sport code blank.",
        ));
    } else if !code_pattern().is_match(&sport.code) {
        failures.push(FieldFailure::new(
            "Code",
            "The sport code must be exactly 3 capital letters.",
        ));
    }

    if sport.name.trim().is_empty() {
        failures.push(FieldFailure::new(
            "Name",
            "You cannot leave the sport name blank.",
        ));
    } else if sport.name.chars().count() > NAME_MAX_LEN {
        failures.push(FieldFailure::new(
            "Name",
            "Sport name cannot be more than 50 characters long.",
        ));
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_sport_passes() {
        let sport = Sport::new("SWM", "Swimming");
        assert!(validate_sport(&sport).is_empty());
    }

    #[test]
    fn blank_code_fails() {
        let sport = Sport::new("  ", "Swimming");
        let failures = validate_sport(&sport);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "Code");
    }

    #[test]
    fn lowercase_code_fails() {
        let sport = Sport::new("swm", "Swimming");
        assert_eq!(validate_sport(&sport).len(), 1);
    }

    #[test]
    fn four_letter_code_fails() {
        let sport = Sport::new("SWIM", "Swimming");
        assert_eq!(validate_sport(&sport).len(), 1);
    }

    #[test]
    fn long_name_fails() {
        let sport = Sport::new("SWM", "S".repeat(51));
        let failures = validate_sport(&sport);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "Name");
    }

    #[test]
    fn fifty_char_name_passes() {
        let sport = Sport::new("SWM", "S".repeat(50));
        assert!(validate_sport(&sport).is_empty());
    }

    #[test]
    fn all_failures_reported_together() {
        let sport = Sport::new("x1", "");
        let failures = validate_sport(&sport);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].field, "Code");
        assert_eq!(failures[1].field, "Name");
    }
}
