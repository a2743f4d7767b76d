// src/domain/sport/entity.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sport in the games programme.
///
/// `id` is store-assigned and immutable after creation. `row_version` is an
/// opaque token regenerated on every successful write; `None` on a candidate
/// means the caller carries no concurrency token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    pub id: i64,

    /// Exactly 3 capital letters, unique across all sports.
    pub code: String,

    /// Non-empty, at most 50 characters.
    pub name: String,

    pub row_version: Option<Uuid>,
}

impl Sport {
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
