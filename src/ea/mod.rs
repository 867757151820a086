//! Steady-state evolutionary algorithm.
//!
//! A population-based search with (μ+λ) truncation replacement:
//! every generation samples `offspring` parents uniformly at random
//! without replacement, mutates each into one child, merges children
//! into the population, and keeps the best `pop_size` individuals.
//! Variation is asexual: there is no recombination operator.
//!
//! # Key Types
//!
//! - [`EaConfig`]: generation budget, offspring count, seed
//! - [`PopulationInit`]: how the initial population is built
//! - [`Individual`]: a genome paired with its fitness
//! - [`EaSteadyState`]: the solver itself
//!
//! # References
//!
//! - Syswerda (1991), "A Study of Reproduction in Generational and
//!   Steady-State Genetic Algorithms"
//! - Beyer & Schwefel (2002), "Evolution strategies: A comprehensive
//!   introduction"

mod config;
mod solver;
mod types;

pub use config::EaConfig;
pub use solver::EaSteadyState;
pub use types::{Individual, PopulationInit};
