// src/lib.rs
// SummerGames - record-management backend for a sporting-event registry
//
// Architecture:
// - Domain-centric: entities and invariant validation live in domain/
// - Repositories: dumb SQLite data mappers behind traits
// - Services: the concurrency-safe mutation protocols and projections
// - Explicit: no implicit behavior, no magic
//
// A thin transport layer (HTTP, IPC, CLI) is expected to sit on top of the
// services; nothing in this crate binds to one.

// ============================================================================
// MODULES
// ============================================================================

pub mod db;
pub mod domain;
pub mod dto;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_athlete,
    validate_contingent,
    validate_sport,
    Athlete,
    Contingent,
    EntityKind,
    FieldFailure,
    Sport,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, create_connection_pool_at, initialize_database, ConnectionPool,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    AthleteRepository,
    ContingentRepository,
    SportRepository,
    SqliteAthleteRepository,
    SqliteContingentRepository,
    SqliteSportRepository,
};

// ============================================================================
// PUBLIC API - Transfer Shapes
// ============================================================================

pub use dto::{AthleteDto, ContingentDto, SportDto};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{AthleteService, ContingentService, SportService};
