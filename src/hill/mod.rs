//! Single-point stochastic local search.
//!
//! [`HillClimber`] keeps one current solution and repeatedly asks the
//! caller-supplied `tweak` operator for a neighboring candidate,
//! accepting it only on strict fitness improvement.
//! [`AdaptiveHillClimber`] uses the same acceptance rule and
//! additionally controls a mutation `strength` parameter with the
//! one-fifth success rule.
//!
//! # References
//!
//! - Hoos & Stützle (2004), *Stochastic Local Search: Foundations
//!   and Applications*
//! - Rechenberg (1973), *Evolutionsstrategie* (origin of the
//!   one-fifth success rule)

mod adaptive;
mod climber;

pub use adaptive::{AdaptiveHillClimber, DEFAULT_STRENGTH, DEFAULT_WINDOW};
pub use climber::HillClimber;
