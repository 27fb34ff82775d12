//! Scree Core - Foundational types for the Scree terrain painter
//!
//! This crate provides the types that all other Scree crates depend on:
//! - `Grid` - Row-major 2D scalar grid (steepness maps)
//! - Error types and Result alias

mod error;
mod grid;

pub use error::{Result, ScreeError};
pub use grid::Grid;
