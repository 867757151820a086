//! Stochastic local-search and population-based optimization.
//!
//! Minimizes an opaque fitness function over an opaque solution
//! representation (the "genome"). The caller supplies a `tweak`
//! (mutation) operator and a `fitness` function as closures; the
//! library assumes nothing about the genome beyond `Clone`. Fitness
//! is `f64` and lower is better (minimization).
//!
//! Three solvers share the [`Solver`] contract:
//!
//! - **Hill climbing** ([`hill::HillClimber`]): greedy single-point
//!   local search with strict-improvement acceptance.
//! - **Adaptive hill climbing** ([`hill::AdaptiveHillClimber`]): the
//!   same acceptance rule plus one-fifth success-rule control of the
//!   mutation strength passed to `tweak`.
//! - **Steady-state EA** ([`ea::EaSteadyState`]): (μ+λ) truncation
//!   replacement with uniform parent sampling and mutation-only
//!   variation.
//!
//! Execution is single-threaded and blocking: `solve` runs its full
//! iteration budget on the calling thread. Each solver records every
//! fitness evaluation in an append-only history that reporting
//! front-ends can consume (see [`history`]); the algorithms themselves
//! never read it.

pub mod ea;
pub mod hill;
pub mod history;
pub mod instrument;
mod solver;

pub use solver::Solver;
