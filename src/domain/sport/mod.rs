// src/domain/sport/mod.rs

pub mod entity;
pub mod invariants;

pub use entity::Sport;
pub use invariants::validate_sport;
