// src/services/sport_service.rs
//
// Sport CRUD protocols: insert with uniqueness-conflict detection, the
// optimistic-concurrency update protocol, and FK-protected delete.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_sport, EntityKind, Sport};
use crate::dto::{AthleteDto, SportDto};
use crate::error::{AppError, AppResult};
use crate::repositories::{AthleteRepository, SportRepository};

pub struct SportService {
    sports: Arc<dyn SportRepository>,
    athletes: Arc<dyn AthleteRepository>,
}

impl SportService {
    pub fn new(sports: Arc<dyn SportRepository>, athletes: Arc<dyn AthleteRepository>) -> Self {
        Self { sports, athletes }
    }

    /// All sports, plain projection. Empty store is a distinct signal.
    pub fn list(&self) -> AppResult<Vec<SportDto>> {
        let sports = self.sports.list_all()?;
        if sports.is_empty() {
            return Err(AppError::NoRecords {
                entity: EntityKind::Sport,
            });
        }
        Ok(sports.iter().map(SportDto::from_entity).collect())
    }

    /// All sports with their athlete collections.
    pub fn list_with_athletes(&self) -> AppResult<Vec<SportDto>> {
        let sports = self.sports.list_all()?;
        if sports.is_empty() {
            return Err(AppError::NoRecords {
                entity: EntityKind::Sport,
            });
        }

        let mut by_sport: HashMap<i64, Vec<AthleteDto>> = HashMap::new();
        for athlete in self.athletes.list_all()? {
            by_sport
                .entry(athlete.sport_id)
                .or_default()
                .push(AthleteDto::from_entity(&athlete));
        }

        Ok(sports
            .iter()
            .map(|s| {
                let athletes = by_sport.remove(&s.id).unwrap_or_default();
                SportDto::from_entity(s).with_athletes(athletes)
            })
            .collect())
    }

    pub fn get(&self, id: i64) -> AppResult<SportDto> {
        let sport = self.sports.get_by_id(id)?.ok_or(AppError::NotFound {
            entity: EntityKind::Sport,
        })?;
        Ok(SportDto::from_entity(&sport))
    }

    /// Insert protocol: validate, insert, return the stored record with
    /// the generated `id` and initial `row_version`.
    pub fn create(&self, candidate: Sport) -> AppResult<Sport> {
        let failures = validate_sport(&candidate);
        if !failures.is_empty() {
            return Err(AppError::Validation(failures));
        }

        let stored = self.sports.insert(&candidate)?;
        log::debug!("created Sport {} ({})", stored.id, stored.code);
        Ok(stored)
    }

    /// Update protocol. Succeeds with no body; the caller re-fetches to
    /// learn the new version token.
    pub fn update(&self, id: i64, candidate: Sport) -> AppResult<()> {
        if candidate.id != id {
            return Err(AppError::IdentityMismatch {
                entity: EntityKind::Sport,
            });
        }

        let failures = validate_sport(&candidate);
        if !failures.is_empty() {
            return Err(AppError::Validation(failures));
        }

        let current = self.sports.get_by_id(id)?.ok_or(AppError::NotFound {
            entity: EntityKind::Sport,
        })?;

        // Advisory comparison before touching the store. A candidate with
        // no token declines concurrency protection and skips this check.
        if let Some(supplied) = candidate.row_version {
            if current.row_version != Some(supplied) {
                return Err(AppError::ConcurrencyConflict {
                    entity: EntityKind::Sport,
                });
            }
        }

        // The conditional write is the authoritative check: a second
        // writer may have committed since the load above.
        let new_version = Uuid::new_v4();
        let updated = self
            .sports
            .update(&candidate, candidate.row_version, new_version)?;

        if !updated {
            return if self.sports.exists(id)? {
                log::warn!("Sport {} lost an update race", id);
                Err(AppError::ConcurrencyConflict {
                    entity: EntityKind::Sport,
                })
            } else {
                Err(AppError::GoneConflict {
                    entity: EntityKind::Sport,
                })
            };
        }

        Ok(())
    }

    /// Delete protocol. The store's restrict-on-delete constraint rejects
    /// the delete while athletes reference the sport.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        if self.sports.get_by_id(id)?.is_none() {
            return Err(AppError::NotFound {
                entity: EntityKind::Sport,
            });
        }

        let deleted = self.sports.delete(id)?;
        if !deleted {
            // Removed by another writer between the load and the delete.
            return Err(AppError::NotFound {
                entity: EntityKind::Sport,
            });
        }

        log::debug!("deleted Sport {}", id);
        Ok(())
    }
}
