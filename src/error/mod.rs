// src/error/mod.rs
//
// Error layer - outcome taxonomy for the registry

pub mod types;

pub use types::{AppError, AppResult};
