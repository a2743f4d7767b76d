// src/services/athlete_service.rs
//
// Athlete CRUD protocols. On top of the shared update/insert/delete
// protocol, athlete candidates carry field-level validation (DOB window,
// BMI window, code shape) and referential-integrity-aware insert
// validation of both foreign keys.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_athlete, Athlete, Contingent, EntityKind, FieldFailure, Sport};
use crate::dto::AthleteDto;
use crate::error::{AppError, AppResult};
use crate::repositories::{AthleteRepository, ContingentRepository, SportRepository};

pub struct AthleteService {
    athletes: Arc<dyn AthleteRepository>,
    sports: Arc<dyn SportRepository>,
    contingents: Arc<dyn ContingentRepository>,
}

impl AthleteService {
    pub fn new(
        athletes: Arc<dyn AthleteRepository>,
        sports: Arc<dyn SportRepository>,
        contingents: Arc<dyn ContingentRepository>,
    ) -> Self {
        Self {
            athletes,
            sports,
            contingents,
        }
    }

    /// All athletes projected with their Sport and Contingent.
    pub fn list(&self) -> AppResult<Vec<AthleteDto>> {
        let athletes = self.athletes.list_all()?;
        if athletes.is_empty() {
            return Err(AppError::NoRecords {
                entity: EntityKind::Athlete,
            });
        }

        let sports: HashMap<i64, Sport> = self
            .sports
            .list_all()?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let contingents: HashMap<i64, Contingent> = self
            .contingents
            .list_all()?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(athletes
            .iter()
            .map(|a| {
                let mut dto = AthleteDto::from_entity(a);
                if let Some(sport) = sports.get(&a.sport_id) {
                    dto = dto.with_sport(sport);
                }
                if let Some(contingent) = contingents.get(&a.contingent_id) {
                    dto = dto.with_contingent(contingent);
                }
                dto
            })
            .collect())
    }

    pub fn get(&self, id: i64) -> AppResult<AthleteDto> {
        let athlete = self.athletes.get_by_id(id)?.ok_or(AppError::NotFound {
            entity: EntityKind::Athlete,
        })?;

        let mut dto = AthleteDto::from_entity(&athlete);
        if let Some(sport) = self.sports.get_by_id(athlete.sport_id)? {
            dto = dto.with_sport(&sport);
        }
        if let Some(contingent) = self.contingents.get_by_id(athlete.contingent_id)? {
            dto = dto.with_contingent(&contingent);
        }
        Ok(dto)
    }

    /// Athletes for one sport, each projected with that sport.
    pub fn list_by_sport(&self, sport_id: i64) -> AppResult<Vec<AthleteDto>> {
        let athletes = self.athletes.list_by_sport(sport_id)?;
        if athletes.is_empty() {
            return Err(AppError::NoneForRelation {
                entity: EntityKind::Athlete,
                relation: EntityKind::Sport,
            });
        }

        let sport = self.sports.get_by_id(sport_id)?;
        Ok(athletes
            .iter()
            .map(|a| {
                let dto = AthleteDto::from_entity(a);
                match &sport {
                    Some(s) => dto.with_sport(s),
                    None => dto,
                }
            })
            .collect())
    }

    /// Athletes for one contingent, each projected with that contingent.
    pub fn list_by_contingent(&self, contingent_id: i64) -> AppResult<Vec<AthleteDto>> {
        let athletes = self.athletes.list_by_contingent(contingent_id)?;
        if athletes.is_empty() {
            return Err(AppError::NoneForRelation {
                entity: EntityKind::Athlete,
                relation: EntityKind::Contingent,
            });
        }

        let contingent = self.contingents.get_by_id(contingent_id)?;
        Ok(athletes
            .iter()
            .map(|a| {
                let dto = AthleteDto::from_entity(a);
                match &contingent {
                    Some(c) => dto.with_contingent(c),
                    None => dto,
                }
            })
            .collect())
    }

    /// Field rules plus reference pre-checks, evaluated together so a
    /// caller sees every failure at once. The store's FK constraints stay
    /// authoritative for races after the pre-check.
    fn validate_candidate(&self, candidate: &Athlete) -> AppResult<Vec<FieldFailure>> {
        let mut failures = validate_athlete(candidate);

        if !self.sports.exists(candidate.sport_id)? {
            failures.push(FieldFailure::new(
                "SportID",
                "The referenced Sport does not exist.",
            ));
        }
        if !self.contingents.exists(candidate.contingent_id)? {
            failures.push(FieldFailure::new(
                "ContingentID",
                "The referenced Contingent does not exist.",
            ));
        }

        Ok(failures)
    }

    pub fn create(&self, candidate: Athlete) -> AppResult<Athlete> {
        let failures = self.validate_candidate(&candidate)?;
        if !failures.is_empty() {
            return Err(AppError::Validation(failures));
        }

        let stored = self.athletes.insert(&candidate)?;
        log::debug!("created Athlete {} ({})", stored.id, stored.display_code());
        Ok(stored)
    }

    pub fn update(&self, id: i64, candidate: Athlete) -> AppResult<()> {
        if candidate.id != id {
            return Err(AppError::IdentityMismatch {
                entity: EntityKind::Athlete,
            });
        }

        let failures = self.validate_candidate(&candidate)?;
        if !failures.is_empty() {
            return Err(AppError::Validation(failures));
        }

        let current = self.athletes.get_by_id(id)?.ok_or(AppError::NotFound {
            entity: EntityKind::Athlete,
        })?;

        // Advisory comparison; skipped when the candidate carries no token.
        if let Some(supplied) = candidate.row_version {
            if current.row_version != Some(supplied) {
                return Err(AppError::ConcurrencyConflict {
                    entity: EntityKind::Athlete,
                });
            }
        }

        let new_version = Uuid::new_v4();
        let updated = self
            .athletes
            .update(&candidate, candidate.row_version, new_version)?;

        if !updated {
            return if self.athletes.exists(id)? {
                log::warn!("Athlete {} lost an update race", id);
                Err(AppError::ConcurrencyConflict {
                    entity: EntityKind::Athlete,
                })
            } else {
                Err(AppError::GoneConflict {
                    entity: EntityKind::Athlete,
                })
            };
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        if self.athletes.get_by_id(id)?.is_none() {
            return Err(AppError::NotFound {
                entity: EntityKind::Athlete,
            });
        }

        let deleted = self.athletes.delete(id)?;
        if !deleted {
            return Err(AppError::NotFound {
                entity: EntityKind::Athlete,
            });
        }

        log::debug!("deleted Athlete {}", id);
        Ok(())
    }
}
