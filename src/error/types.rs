// src/error/types.rs
//
// The outcome taxonomy for every registry operation. Each variant carries
// enough context for a caller to branch on the cause, not just on failure.

use crate::domain::{EntityKind, FieldFailure};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Single-row lookup (or delete target) does not exist.
    #[error("{entity} record not found")]
    NotFound { entity: EntityKind },

    /// A plain list query matched nothing.
    #[error("no {entity} records found")]
    NoRecords { entity: EntityKind },

    /// A relation-filtered list query matched nothing.
    #[error("no {entity} records for the specified {relation}")]
    NoneForRelation {
        entity: EntityKind,
        relation: EntityKind,
    },

    /// The target id does not match the id inside the candidate payload.
    #[error("incorrect id for {entity}")]
    IdentityMismatch { entity: EntityKind },

    /// One or more field-level rules failed. Failures are ordered and
    /// independent; no rule short-circuits another.
    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<FieldFailure>),

    /// The stored version token no longer matches the caller's token.
    #[error("{entity} has been changed by another user, back out and try editing the record again")]
    ConcurrencyConflict { entity: EntityKind },

    /// The row was deleted by another writer between load and commit.
    #[error("{entity} has been removed by another user")]
    GoneConflict { entity: EntityKind },

    /// A unique index rejected the write.
    #[error("unable to save: duplicate {field} for {entity}")]
    DuplicateKey {
        entity: EntityKind,
        field: &'static str,
    },

    /// Restrict-on-delete: the row still has dependents assigned.
    #[error("cannot delete a {entity} that has {dependent} records assigned")]
    ReferentialConflict {
        entity: EntityKind,
        dependent: EntityKind,
    },

    /// Catch-all store failure not classified above.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("pool error: {0}")]
    Pool(String),

    #[error("{0}")]
    Other(String),
}

fn summarize(failures: &[FieldFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_failure() {
        let err = AppError::Validation(vec![
            FieldFailure::new("DOB", "out of range"),
            FieldFailure::new("Weight", "out of range"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("DOB"));
        assert!(msg.contains("Weight"));
    }

    #[test]
    fn messages_distinguish_conflict_causes() {
        let concurrency = AppError::ConcurrencyConflict {
            entity: EntityKind::Sport,
        }
        .to_string();
        let gone = AppError::GoneConflict {
            entity: EntityKind::Sport,
        }
        .to_string();
        let referential = AppError::ReferentialConflict {
            entity: EntityKind::Sport,
            dependent: EntityKind::Athlete,
        }
        .to_string();
        assert_ne!(concurrency, gone);
        assert!(referential.contains("Athlete"));
    }
}
