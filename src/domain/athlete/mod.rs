// src/domain/athlete/mod.rs

pub mod entity;
pub mod invariants;

pub use entity::Athlete;
pub use invariants::validate_athlete;
