// src/domain/contingent/entity.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A national or regional contingent fielding athletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contingent {
    pub id: i64,

    /// Unique, non-empty.
    pub code: String,

    /// Non-empty.
    pub name: String,

    pub row_version: Option<Uuid>,
}

impl Contingent {
    /// Candidate for insertion; the store assigns `id` and `row_version`.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            code: code.into(),
            name: name.into(),
            row_version: None,
        }
    }
}
