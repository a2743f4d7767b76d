// src/repositories/contingent_repository.rs
//
// Contingent persistence

use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use super::{constraint_kind, ConstraintKind};
use crate::db::{get_connection, ConnectionPool};
use crate::domain::{Contingent, EntityKind};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ContingentRepository: Send + Sync {
    /// Insert a candidate; returns the stored record with the assigned
    /// `id` and initial `row_version`.
    fn insert(&self, contingent: &Contingent) -> AppResult<Contingent>;

    fn get_by_id(&self, id: i64) -> AppResult<Option<Contingent>>;

    fn list_all(&self) -> AppResult<Vec<Contingent>>;

    /// Version-conditional write; see `SportRepository::update`.
    fn update(
        &self,
        contingent: &Contingent,
        expected: Option<Uuid>,
        new_version: Uuid,
    ) -> AppResult<bool>;

    /// Fails with `ReferentialConflict` while athletes still reference the
    /// contingent.
    fn delete(&self, id: i64) -> AppResult<bool>;

    fn exists(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteContingentRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteContingentRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_contingent(row: &Row) -> Result<Contingent, rusqlite::Error> {
        let version_str: String = row.get("row_version")?;
        let row_version = Uuid::parse_str(&version_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Contingent {
            id: row.get("id")?,
            code: row.get("code")?,
            name: row.get("name")?,
            row_version: Some(row_version),
        })
    }

    fn classify_write_error(err: rusqlite::Error) -> AppError {
        match constraint_kind(&err) {
            Some(ConstraintKind::Unique) => AppError::DuplicateKey {
                entity: EntityKind::Contingent,
                field: "Code",
            },
            Some(ConstraintKind::ForeignKey) => AppError::ReferentialConflict {
                entity: EntityKind::Contingent,
                dependent: EntityKind::Athlete,
            },
            None => AppError::Database(err),
        }
    }
}

impl ContingentRepository for SqliteContingentRepository {
    fn insert(&self, contingent: &Contingent) -> AppResult<Contingent> {
        let conn = get_connection(&self.pool)?;
        let version = Uuid::new_v4();

        conn.execute(
            "INSERT INTO contingent (code, name, row_version) VALUES (?1, ?2, ?3)",
            params![contingent.code, contingent.name, version.to_string()],
        )
        .map_err(Self::classify_write_error)?;

        Ok(Contingent {
            id: conn.last_insert_rowid(),
            code: contingent.code.clone(),
            name: contingent.name.clone(),
            row_version: Some(version),
        })
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Contingent>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt =
            conn.prepare("SELECT id, code, name, row_version FROM contingent WHERE id = ?1")?;

        match stmt.query_row(params![id], Self::row_to_contingent) {
            Ok(contingent) => Ok(Some(contingent)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Contingent>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt =
            conn.prepare("SELECT id, code, name, row_version FROM contingent ORDER BY code")?;

        let contingents: Vec<Contingent> = stmt
            .query_map([], Self::row_to_contingent)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(contingents)
    }

    fn update(
        &self,
        contingent: &Contingent,
        expected: Option<Uuid>,
        new_version: Uuid,
    ) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let rows_affected = match expected {
            Some(token) => conn
                .execute(
                    "UPDATE contingent SET code = ?1, name = ?2, row_version = ?3
                     WHERE id = ?4 AND row_version = ?5",
                    params![
                        contingent.code,
                        contingent.name,
                        new_version.to_string(),
                        contingent.id,
                        token.to_string()
                    ],
                )
                .map_err(Self::classify_write_error)?,
            None => conn
                .execute(
                    "UPDATE contingent SET code = ?1, name = ?2, row_version = ?3 WHERE id = ?4",
                    params![
                        contingent.code,
                        contingent.name,
                        new_version.to_string(),
                        contingent.id
                    ],
                )
                .map_err(Self::classify_write_error)?,
        };

        Ok(rows_affected > 0)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let rows_affected = conn
            .execute("DELETE FROM contingent WHERE id = ?1", params![id])
            .map_err(Self::classify_write_error)?;

        Ok(rows_affected > 0)
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM contingent WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
