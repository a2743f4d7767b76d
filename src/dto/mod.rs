// src/dto/mod.rs
//
// Transfer shapes for the query/projection layer.
//
// These are pure assemblies of store entities: an entity plus zero or more
// related entities, built by the services and handed to the transport
// layer. Relations are optional so each endpoint variant (plain list,
// list-with-relations, single) uses the same shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Athlete, Contingent, Sport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub row_version: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athletes: Option<Vec<AthleteDto>>,
}

impl SportDto {
    pub fn from_entity(sport: &Sport) -> Self {
        Self {
            id: sport.id,
            code: sport.code.clone(),
            name: sport.name.clone(),
            row_version: sport.row_version,
            athletes: None,
        }
    }

    pub fn with_athletes(mut self, athletes: Vec<AthleteDto>) -> Self {
        self.athletes = Some(athletes);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContingentDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub row_version: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athletes: Option<Vec<AthleteDto>>,
}

impl ContingentDto {
    pub fn from_entity(contingent: &Contingent) -> Self {
        Self {
            id: contingent.id,
            code: contingent.code.clone(),
            name: contingent.name.clone(),
            row_version: contingent.row_version,
            athletes: None,
        }
    }

    pub fn with_athletes(mut self, athletes: Vec<AthleteDto>) -> Self {
        self.athletes = Some(athletes);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteDto {
    pub id: i64,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub athlete_code: String,
    pub dob: chrono::NaiveDate,
    pub height_cm: i32,
    pub weight_kg: f64,
    pub gender: String,
    pub affiliation: String,
    pub row_version: Option<Uuid>,
    pub contingent_id: i64,
    pub sport_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<Box<SportDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contingent: Option<Box<ContingentDto>>,
}

impl AthleteDto {
    pub fn from_entity(athlete: &Athlete) -> Self {
        Self {
            id: athlete.id,
            first_name: athlete.first_name.clone(),
            middle_name: athlete.middle_name.clone(),
            last_name: athlete.last_name.clone(),
            athlete_code: athlete.athlete_code.clone(),
            dob: athlete.dob,
            height_cm: athlete.height_cm,
            weight_kg: athlete.weight_kg,
            gender: athlete.gender.clone(),
            affiliation: athlete.affiliation.clone(),
            row_version: athlete.row_version,
            contingent_id: athlete.contingent_id,
            sport_id: athlete.sport_id,
            sport: None,
            contingent: None,
        }
    }

    pub fn with_sport(mut self, sport: &Sport) -> Self {
        self.sport = Some(Box::new(SportDto::from_entity(sport)));
        self
    }

    pub fn with_contingent(mut self, contingent: &Contingent) -> Self {
        self.contingent = Some(Box::new(ContingentDto::from_entity(contingent)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sport() -> Sport {
        Sport {
            id: 1,
            code: "SWM".to_string(),
            name: "Swimming".to_string(),
            row_version: Some(Uuid::new_v4()),
        }
    }

    fn athlete() -> Athlete {
        let dob = NaiveDate::from_ymd_opt(2006, 8, 18).unwrap();
        Athlete::new("Summer", "McIntosh", dob, 175, 60.0, 1, 1)
    }

    #[test]
    fn plain_projection_omits_relations() {
        let dto = SportDto::from_entity(&sport());
        assert!(dto.athletes.is_none());

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("athletes").is_none());
        assert_eq!(json["code"], "SWM");
    }

    #[test]
    fn athlete_projection_embeds_relations_on_request() {
        let dto = AthleteDto::from_entity(&athlete()).with_sport(&sport());
        assert_eq!(dto.sport.as_ref().unwrap().code, "SWM");
        assert!(dto.contingent.is_none());

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["sport"]["code"], "SWM");
        assert!(json.get("contingent").is_none());
    }

    #[test]
    fn projection_copies_version_token() {
        let s = sport();
        let dto = SportDto::from_entity(&s);
        assert_eq!(dto.row_version, s.row_version);
    }
}
