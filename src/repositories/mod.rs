// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic beyond constraint-error classification
// - NO event emission
// - NO cross-repository calls
// - Explicit SQL only
//
// The version-conditional update (`WHERE id = ? AND row_version = ?`) lives
// here: it is the authoritative concurrency check, atomic at the store.

pub mod athlete_repository;
pub mod contingent_repository;
pub mod sport_repository;

pub use athlete_repository::{AthleteRepository, SqliteAthleteRepository};
pub use contingent_repository::{ContingentRepository, SqliteContingentRepository};
pub use sport_repository::{SportRepository, SqliteSportRepository};

#[cfg(test)]
pub use athlete_repository::MockAthleteRepository;
#[cfg(test)]
pub use contingent_repository::MockContingentRepository;
#[cfg(test)]
pub use sport_repository::MockSportRepository;

/// Which storage constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintKind {
    Unique,
    ForeignKey,
}

/// Inspect a rusqlite error for a constraint-violation signature.
///
/// SQLite reports these as `SQLITE_CONSTRAINT` with a message naming the
/// constraint ("UNIQUE constraint failed: sport.code", "FOREIGN KEY
/// constraint failed"). Anything else is left to the caller as a generic
/// persistence failure.
pub(crate) fn constraint_kind(err: &rusqlite::Error) -> Option<ConstraintKind> {
    if let rusqlite::Error::SqliteFailure(cause, message) = err {
        if cause.code == rusqlite::ErrorCode::ConstraintViolation {
            let msg = message.as_deref().unwrap_or("");
            if msg.contains("UNIQUE") {
                return Some(ConstraintKind::Unique);
            }
            if msg.contains("FOREIGN KEY") {
                return Some(ConstraintKind::ForeignKey);
            }
        }
    }
    None
}
