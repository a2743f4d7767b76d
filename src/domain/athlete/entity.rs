// src/domain/athlete/entity.rs

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered athlete.
///
/// `sport_id` and `contingent_id` must reference existing rows; both
/// relations are restrict-on-delete at the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: i64,

    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,

    /// 7-digit numeric string, unique across all athletes.
    pub athlete_code: String,

    pub dob: NaiveDate,

    pub height_cm: i32,
    pub weight_kg: f64,

    pub gender: String,
    pub affiliation: String,

    pub row_version: Option<Uuid>,

    pub contingent_id: i64,
    pub sport_id: i64,
}

impl Athlete {
    /// Candidate for insertion; the store assigns `id` and `row_version`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dob: NaiveDate,
        height_cm: i32,
        weight_kg: f64,
        sport_id: i64,
        contingent_id: i64,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            middle_name: None,
            last_name: last_name.into(),
            athlete_code: "0000000".to_string(),
            dob,
            height_cm,
            weight_kg,
            gender: String::new(),
            affiliation: String::new(),
            row_version: None,
            contingent_id,
            sport_id,
        }
    }

    fn middle_initial(&self) -> Option<String> {
        self.middle_name
            .as_deref()
            .and_then(|m| m.chars().next())
            .map(|c| c.to_uppercase().to_string())
    }

    /// "First M. Last" (middle initial only when a middle name exists).
    pub fn full_name(&self) -> String {
        match self.middle_initial() {
            Some(initial) => format!("{} {}. {}", self.first_name, initial, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// "Last, First M."
    pub fn formal_name(&self) -> String {
        match self.middle_initial() {
            Some(initial) => format!("{}, {} {}.", self.last_name, self.first_name, initial),
            None => format!("{}, {}", self.last_name, self.first_name),
        }
    }

    /// Zero-padded code display string, e.g. "A:0004312".
    pub fn display_code(&self) -> String {
        format!("A:{:0>7}", self.athlete_code)
    }

    /// "Formal Name - A:0000000"
    pub fn summary(&self) -> String {
        format!("{} - {}", self.formal_name(), self.display_code())
    }

    /// Body-mass index: weight(kg) / height(m)^2.
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_cm as f64 / 100.0).powi(2)
    }

    /// Age in whole years as of `today`: year difference, minus one when
    /// the birthday has not yet occurred this year.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.dob.year();
        if (today.month(), today.day()) < (self.dob.month(), self.dob.day()) {
            age -= 1;
        }
        age
    }

    /// Age in whole years as of the local date.
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete() -> Athlete {
        let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let mut a = Athlete::new("Penny", "Oleksiak", dob, 186, 70.0, 1, 1);
        a.athlete_code = "4312".to_string();
        a
    }

    #[test]
    fn full_name_without_middle() {
        assert_eq!(athlete().full_name(), "Penny Oleksiak");
    }

    #[test]
    fn full_name_with_middle_initial_uppercased() {
        let mut a = athlete();
        a.middle_name = Some("mae".to_string());
        assert_eq!(a.full_name(), "Penny M. Oleksiak");
    }

    #[test]
    fn formal_name_shapes() {
        let mut a = athlete();
        assert_eq!(a.formal_name(), "Oleksiak, Penny");
        a.middle_name = Some("Mae".to_string());
        assert_eq!(a.formal_name(), "Oleksiak, Penny M.");
    }

    #[test]
    fn display_code_is_zero_padded() {
        assert_eq!(athlete().display_code(), "A:0004312");
    }

    #[test]
    fn summary_combines_formal_name_and_code() {
        assert_eq!(athlete().summary(), "Oleksiak, Penny - A:0004312");
    }

    #[test]
    fn bmi_from_height_and_weight() {
        let mut a = athlete();
        a.height_cm = 200;
        a.weight_kg = 80.0;
        assert!((a.bmi() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn age_counts_whole_years_only() {
        let a = athlete(); // born 2000-06-15

        // Day before the birthday
        let before = NaiveDate::from_ymd_opt(2026, 6, 14).unwrap();
        assert_eq!(a.age_on(before), 25);

        // On the birthday
        let on = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        assert_eq!(a.age_on(on), 26);

        // Day after
        let after = NaiveDate::from_ymd_opt(2026, 6, 16).unwrap();
        assert_eq!(a.age_on(after), 26);
    }
}
