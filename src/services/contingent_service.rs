// src/services/contingent_service.rs
//
// Contingent CRUD protocols; structurally the same linear protocol as
// SportService, with Contingent's own validation rules.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_contingent, Contingent, EntityKind};
use crate::dto::{AthleteDto, ContingentDto};
use crate::error::{AppError, AppResult};
use crate::repositories::{AthleteRepository, ContingentRepository};

pub struct ContingentService {
    contingents: Arc<dyn ContingentRepository>,
    athletes: Arc<dyn AthleteRepository>,
}

impl ContingentService {
    pub fn new(
        contingents: Arc<dyn ContingentRepository>,
        athletes: Arc<dyn AthleteRepository>,
    ) -> Self {
        Self {
            contingents,
            athletes,
        }
    }

    pub fn list(&self) -> AppResult<Vec<ContingentDto>> {
        let contingents = self.contingents.list_all()?;
        if contingents.is_empty() {
            return Err(AppError::NoRecords {
                entity: EntityKind::Contingent,
            });
        }
        Ok(contingents.iter().map(ContingentDto::from_entity).collect())
    }

    pub fn list_with_athletes(&self) -> AppResult<Vec<ContingentDto>> {
        let contingents = self.contingents.list_all()?;
        if contingents.is_empty() {
            return Err(AppError::NoRecords {
                entity: EntityKind::Contingent,
            });
        }

        let mut by_contingent: HashMap<i64, Vec<AthleteDto>> = HashMap::new();
        for athlete in self.athletes.list_all()? {
            by_contingent
                .entry(athlete.contingent_id)
                .or_default()
                .push(AthleteDto::from_entity(&athlete));
        }

        Ok(contingents
            .iter()
            .map(|c| {
                let athletes = by_contingent.remove(&c.id).unwrap_or_default();
                ContingentDto::from_entity(c).with_athletes(athletes)
            })
            .collect())
    }

    pub fn get(&self, id: i64) -> AppResult<ContingentDto> {
        let contingent = self.contingents.get_by_id(id)?.ok_or(AppError::NotFound {
            entity: EntityKind::Contingent,
        })?;
        Ok(ContingentDto::from_entity(&contingent))
    }

    pub fn create(&self, candidate: Contingent) -> AppResult<Contingent> {
        let failures = validate_contingent(&candidate);
        if !failures.is_empty() {
            return Err(AppError::Validation(failures));
        }

        let stored = self.contingents.insert(&candidate)?;
        log::debug!("created Contingent {} ({})", stored.id, stored.code);
        Ok(stored)
    }

    pub fn update(&self, id: i64, candidate: Contingent) -> AppResult<()> {
        if candidate.id != id {
            return Err(AppError::IdentityMismatch {
                entity: EntityKind::Contingent,
            });
        }

        let failures = validate_contingent(&candidate);
        if !failures.is_empty() {
            return Err(AppError::Validation(failures));
        }

        let current = self.contingents.get_by_id(id)?.ok_or(AppError::NotFound {
            entity: EntityKind::Contingent,
        })?;

        if let Some(supplied) = candidate.row_version {
            if current.row_version != Some(supplied) {
                return Err(AppError::ConcurrencyConflict {
                    entity: EntityKind::Contingent,
                });
            }
        }

        let new_version = Uuid::new_v4();
        let updated = self
            .contingents
            .update(&candidate, candidate.row_version, new_version)?;

        if !updated {
            return if self.contingents.exists(id)? {
                log::warn!("Contingent {} lost an update race", id);
                Err(AppError::ConcurrencyConflict {
                    entity: EntityKind::Contingent,
                })
            } else {
                Err(AppError::GoneConflict {
                    entity: EntityKind::Contingent,
                })
            };
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        if self.contingents.get_by_id(id)?.is_none() {
            return Err(AppError::NotFound {
                entity: EntityKind::Contingent,
            });
        }

        let deleted = self.contingents.delete(id)?;
        if !deleted {
            return Err(AppError::NotFound {
                entity: EntityKind::Contingent,
            });
        }

        log::debug!("deleted Contingent {}", id);
        Ok(())
    }
}
