// src/domain/athlete/invariants.rs

use super::entity::Athlete;
use crate::domain::FieldFailure;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

// Allowed age window for the summer 2025 games. Half-open: the lower bound
// is accepted, the upper bound is rejected.
const DOB_MIN: (i32, u32, u32) = (1995, 8, 22);
const DOB_MAX_EXCLUSIVE: (i32, u32, u32) = (2013, 8, 7);

const BMI_MIN: f64 = 15.0;
const BMI_MAX_EXCLUSIVE: f64 = 40.0;

fn athlete_code_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[0-9]{7}$").expect("athlete code pattern"))
}

fn dob_min() -> NaiveDate {
    let (y, m, d) = DOB_MIN;
    NaiveDate::from_ymd_opt(y, m, d).expect("dob lower bound")
}

fn dob_max_exclusive() -> NaiveDate {
    let (y, m, d) = DOB_MAX_EXCLUSIVE;
    NaiveDate::from_ymd_opt(y, m, d).expect("dob upper bound")
}

/// Validates all Athlete invariants.
///
/// Every rule is evaluated; the result lists each failure with the field
/// it is attributed to.
pub fn validate_athlete(athlete: &Athlete) -> Vec<FieldFailure> {
    let mut failures = Vec::new();

    if athlete.first_name.trim().is_empty() {
        failures.push(FieldFailure::new(
            "FirstName",
            "You cannot leave the first name blank.",
        ));
    }

    if athlete.last_name.trim().is_empty() {
        failures.push(FieldFailure::new(
            "LastName",
            "You cannot leave the last name blank.",
        ));
    }

    if !athlete_code_pattern().is_match(&athlete.athlete_code) {
        failures.push(FieldFailure::new(
            "AthleteCode",
            "The athlete code must be exactly 7 digits.",
        ));
    }

    if athlete.dob < dob_min() || athlete.dob >= dob_max_exclusive() {
        failures.push(FieldFailure::new(
            "DOB",
            "DOB must be between 1995-08-22 and 2013-08-06.",
        ));
    }

    let bmi = athlete.bmi();
    if !(bmi >= BMI_MIN && bmi < BMI_MAX_EXCLUSIVE) {
        failures.push(FieldFailure::new(
            "Weight",
            format!(
                "BMI of {:.1} is outside the allowable range of 15 to 40",
                bmi
            ),
        ));
    }

    failures
}
