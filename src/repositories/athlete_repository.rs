// src/repositories/athlete_repository.rs
//
// Athlete persistence

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use super::{constraint_kind, ConstraintKind};
use crate::db::{get_connection, ConnectionPool};
use crate::domain::{Athlete, EntityKind};
use crate::error::{AppError, AppResult};

const SELECT_COLUMNS: &str = "id, first_name, middle_name, last_name, athlete_code, dob,
     height_cm, weight_kg, gender, affiliation, row_version, contingent_id, sport_id";

#[cfg_attr(test, mockall::automock)]
pub trait AthleteRepository: Send + Sync {
    /// Insert a candidate; returns the stored record with the assigned
    /// `id` and initial `row_version`.
    fn insert(&self, athlete: &Athlete) -> AppResult<Athlete>;

    fn get_by_id(&self, id: i64) -> AppResult<Option<Athlete>>;

    fn list_all(&self) -> AppResult<Vec<Athlete>>;

    fn list_by_sport(&self, sport_id: i64) -> AppResult<Vec<Athlete>>;

    fn list_by_contingent(&self, contingent_id: i64) -> AppResult<Vec<Athlete>>;

    /// Version-conditional write; see `SportRepository::update`.
    fn update(
        &self,
        athlete: &Athlete,
        expected: Option<Uuid>,
        new_version: Uuid,
    ) -> AppResult<bool>;

    fn delete(&self, id: i64) -> AppResult<bool>;

    fn exists(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteAthleteRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteAthleteRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Athlete - returns rusqlite::Error for query_map compatibility
    fn row_to_athlete(row: &Row) -> Result<Athlete, rusqlite::Error> {
        let dob_str: String = row.get("dob")?;
        let dob = NaiveDate::parse_from_str(&dob_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let version_str: String = row.get("row_version")?;
        let row_version = Uuid::parse_str(&version_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Athlete {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            middle_name: row.get("middle_name")?,
            last_name: row.get("last_name")?,
            athlete_code: row.get("athlete_code")?,
            dob,
            height_cm: row.get("height_cm")?,
            weight_kg: row.get("weight_kg")?,
            gender: row.get("gender")?,
            affiliation: row.get("affiliation")?,
            row_version: Some(row_version),
            contingent_id: row.get("contingent_id")?,
            sport_id: row.get("sport_id")?,
        })
    }

    // A dangling foreign key surfaces here only when the referenced row
    // vanished between the service's existence pre-check and the write;
    // it stays a generic persistence failure.
    fn classify_write_error(err: rusqlite::Error) -> AppError {
        match constraint_kind(&err) {
            Some(ConstraintKind::Unique) => AppError::DuplicateKey {
                entity: EntityKind::Athlete,
                field: "AthleteCode",
            },
            _ => AppError::Database(err),
        }
    }

    fn query_athletes(
        &self,
        sql: &str,
        filter: Option<i64>,
    ) -> AppResult<Vec<Athlete>> {
        let conn = get_connection(&self.pool)?;
        let mut stmt = conn.prepare(sql)?;

        let rows = match filter {
            Some(id) => stmt.query_map(params![id], Self::row_to_athlete)?,
            None => stmt.query_map([], Self::row_to_athlete)?,
        };

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

impl AthleteRepository for SqliteAthleteRepository {
    fn insert(&self, athlete: &Athlete) -> AppResult<Athlete> {
        let conn = get_connection(&self.pool)?;
        let version = Uuid::new_v4();

        conn.execute(
            "INSERT INTO athlete (
                first_name, middle_name, last_name, athlete_code, dob,
                height_cm, weight_kg, gender, affiliation, row_version,
                contingent_id, sport_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                athlete.first_name,
                athlete.middle_name,
                athlete.last_name,
                athlete.athlete_code,
                athlete.dob.format("%Y-%m-%d").to_string(),
                athlete.height_cm,
                athlete.weight_kg,
                athlete.gender,
                athlete.affiliation,
                version.to_string(),
                athlete.contingent_id,
                athlete.sport_id,
            ],
        )
        .map_err(Self::classify_write_error)?;

        let mut stored = athlete.clone();
        stored.id = conn.last_insert_rowid();
        stored.row_version = Some(version);
        Ok(stored)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Athlete>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM athlete WHERE id = ?1",
            SELECT_COLUMNS
        ))?;

        match stmt.query_row(params![id], Self::row_to_athlete) {
            Ok(athlete) => Ok(Some(athlete)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Athlete>> {
        self.query_athletes(
            &format!(
                "SELECT {} FROM athlete ORDER BY last_name, first_name",
                SELECT_COLUMNS
            ),
            None,
        )
    }

    fn list_by_sport(&self, sport_id: i64) -> AppResult<Vec<Athlete>> {
        self.query_athletes(
            &format!(
                "SELECT {} FROM athlete WHERE sport_id = ?1 ORDER BY last_name, first_name",
                SELECT_COLUMNS
            ),
            Some(sport_id),
        )
    }

    fn list_by_contingent(&self, contingent_id: i64) -> AppResult<Vec<Athlete>> {
        self.query_athletes(
            &format!(
                "SELECT {} FROM athlete WHERE contingent_id = ?1 ORDER BY last_name, first_name",
                SELECT_COLUMNS
            ),
            Some(contingent_id),
        )
    }

    fn update(
        &self,
        athlete: &Athlete,
        expected: Option<Uuid>,
        new_version: Uuid,
    ) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        const SET_CLAUSE: &str = "first_name = ?1, middle_name = ?2, last_name = ?3,
             athlete_code = ?4, dob = ?5, height_cm = ?6, weight_kg = ?7,
             gender = ?8, affiliation = ?9, row_version = ?10,
             contingent_id = ?11, sport_id = ?12";

        let rows_affected = match expected {
            Some(token) => conn
                .execute(
                    &format!(
                        "UPDATE athlete SET {} WHERE id = ?13 AND row_version = ?14",
                        SET_CLAUSE
                    ),
                    params![
                        athlete.first_name,
                        athlete.middle_name,
                        athlete.last_name,
                        athlete.athlete_code,
                        athlete.dob.format("%Y-%m-%d").to_string(),
                        athlete.height_cm,
                        athlete.weight_kg,
                        athlete.gender,
                        athlete.affiliation,
                        new_version.to_string(),
                        athlete.contingent_id,
                        athlete.sport_id,
                        athlete.id,
                        token.to_string(),
                    ],
                )
                .map_err(Self::classify_write_error)?,
            None => conn
                .execute(
                    &format!("UPDATE athlete SET {} WHERE id = ?13", SET_CLAUSE),
                    params![
                        athlete.first_name,
                        athlete.middle_name,
                        athlete.last_name,
                        athlete.athlete_code,
                        athlete.dob.format("%Y-%m-%d").to_string(),
                        athlete.height_cm,
                        athlete.weight_kg,
                        athlete.gender,
                        athlete.affiliation,
                        new_version.to_string(),
                        athlete.contingent_id,
                        athlete.sport_id,
                        athlete.id,
                    ],
                )
                .map_err(Self::classify_write_error)?,
        };

        Ok(rows_affected > 0)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let rows_affected = conn
            .execute("DELETE FROM athlete WHERE id = ?1", params![id])
            .map_err(Self::classify_write_error)?;

        Ok(rows_affected > 0)
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM athlete WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
