// src/domain/contingent/mod.rs

pub mod entity;
pub mod invariants;

pub use entity::Contingent;
pub use invariants::validate_contingent;
