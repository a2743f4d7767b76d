// src/repositories/sport_repository.rs
//
// Sport persistence

use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use super::{constraint_kind, ConstraintKind};
use crate::db::{get_connection, ConnectionPool};
use crate::domain::{EntityKind, Sport};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait SportRepository: Send + Sync {
    /// Insert a candidate; returns the stored record with the assigned
    /// `id` and initial `row_version`.
    fn insert(&self, sport: &Sport) -> AppResult<Sport>;

    fn get_by_id(&self, id: i64) -> AppResult<Option<Sport>>;

    fn list_all(&self) -> AppResult<Vec<Sport>>;

    /// Version-conditional write. When `expected` is `Some`, the row is
    /// updated only if its stored token still matches; when `None`, the
    /// write is conditioned on the id alone. Returns `false` when no row
    /// matched the precondition.
    fn update(&self, sport: &Sport, expected: Option<Uuid>, new_version: Uuid) -> AppResult<bool>;

    /// Returns `false` when no row had that id. Fails with
    /// `ReferentialConflict` while athletes still reference the sport.
    fn delete(&self, id: i64) -> AppResult<bool>;

    fn exists(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteSportRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSportRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Sport - returns rusqlite::Error for query_map compatibility
    fn row_to_sport(row: &Row) -> Result<Sport, rusqlite::Error> {
        let version_str: String = row.get("row_version")?;
        let row_version = Uuid::parse_str(&version_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Sport {
            id: row.get("id")?,
            code: row.get("code")?,
            name: row.get("name")?,
            row_version: Some(row_version),
        })
    }

    fn classify_write_error(err: rusqlite::Error) -> AppError {
        match constraint_kind(&err) {
            Some(ConstraintKind::Unique) => AppError::DuplicateKey {
                entity: EntityKind::Sport,
                field: "Code",
            },
            Some(ConstraintKind::ForeignKey) => AppError::ReferentialConflict {
                entity: EntityKind::Sport,
                dependent: EntityKind::Athlete,
            },
            None => AppError::Database(err),
        }
    }
}

impl SportRepository for SqliteSportRepository {
    fn insert(&self, sport: &Sport) -> AppResult<Sport> {
        let conn = get_connection(&self.pool)?;
        let version = Uuid::new_v4();

        conn.execute(
            "INSERT INTO sport (code, name, row_version) VALUES (?1, ?2, ?3)",
            params![sport.code, sport.name, version.to_string()],
        )
        .map_err(Self::classify_write_error)?;

        Ok(Sport {
            id: conn.last_insert_rowid(),
            code: sport.code.clone(),
            name: sport.name.clone(),
            row_version: Some(version),
        })
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Sport>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt =
            conn.prepare("SELECT id, code, name, row_version FROM sport WHERE id = ?1")?;

        match stmt.query_row(params![id], Self::row_to_sport) {
            Ok(sport) => Ok(Some(sport)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Sport>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt =
            conn.prepare("SELECT id, code, name, row_version FROM sport ORDER BY code")?;

        let sports: Vec<Sport> = stmt
            .query_map([], Self::row_to_sport)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sports)
    }

    fn update(&self, sport: &Sport, expected: Option<Uuid>, new_version: Uuid) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let rows_affected = match expected {
            Some(token) => conn
                .execute(
                    "UPDATE sport SET code = ?1, name = ?2, row_version = ?3
                     WHERE id = ?4 AND row_version = ?5",
                    params![
                        sport.code,
                        sport.name,
                        new_version.to_string(),
                        sport.id,
                        token.to_string()
                    ],
                )
                .map_err(Self::classify_write_error)?,
            None => conn
                .execute(
                    "UPDATE sport SET code = ?1, name = ?2, row_version = ?3 WHERE id = ?4",
                    params![sport.code, sport.name, new_version.to_string(), sport.id],
                )
                .map_err(Self::classify_write_error)?,
        };

        Ok(rows_affected > 0)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let rows_affected = conn
            .execute("DELETE FROM sport WHERE id = ?1", params![id])
            .map_err(Self::classify_write_error)?;

        Ok(rows_affected > 0)
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sport WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
