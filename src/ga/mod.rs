//! Genetic algorithm over daily job subsets.
//!
//! - [`Selection`] — Ordered, duplicate-free chromosome of job ids
//! - [`operators`] — Single-point crossover, capacity fill, replace mutation
//! - [`GaConfig`] / [`evolve`] — Generation loop with elitist reproduction

mod chromosome;
mod engine;
pub mod operators;

pub use chromosome::Selection;
pub use engine::{evolve, GaConfig};
