// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Each service owns the full mutation protocol for its entity: validation,
// the optimistic-concurrency update, conflict classification, and the
// read-side projections.

pub mod athlete_service;
pub mod contingent_service;
pub mod sport_service;

#[cfg(test)]
mod athlete_service_tests;

pub use athlete_service::AthleteService;
pub use contingent_service::ContingentService;
pub use sport_service::SportService;
