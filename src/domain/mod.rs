// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod athlete;
pub mod contingent;
pub mod sport;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use athlete::{validate_athlete, Athlete};
pub use contingent::{validate_contingent, Contingent};
pub use sport::{validate_sport, Sport};

// ============================================================================
// SHARED DOMAIN TYPES
// ============================================================================

use serde::Serialize;

/// The three entity types the registry manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Sport,
    Contingent,
    Athlete,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Sport => write!(f, "Sport"),
            EntityKind::Contingent => write!(f, "Contingent"),
            EntityKind::Athlete => write!(f, "Athlete"),
        }
    }
}

/// A single field-level validation failure.
///
/// Validation produces an ordered list of these; rules are evaluated
/// independently and never short-circuit each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: &'static str,
    pub message: String,
}

impl FieldFailure {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
