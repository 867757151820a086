//! Greedy hill climbing.

use crate::solver::Solver;

/// Greedy single-point local search.
///
/// Each step produces `candidate = tweak(current)`, evaluates it,
/// records the fitness in the history, and replaces the current
/// solution only on strict improvement. Plateau moves are rejected.
/// Exactly `steps` candidates are evaluated per [`solve`](Solver::solve)
/// call; there is no early stopping, and a budget of zero is a no-op.
///
/// The climber owns no random source: all stochasticity lives inside
/// the caller's `tweak`. `tweak` receives the current solution by
/// reference and must return a new genome rather than mutate in place.
///
/// # Examples
///
/// ```
/// use stochsearch::{hill::HillClimber, Solver};
///
/// // Deterministic tweak: always step down by one.
/// let mut hc = HillClimber::new(100, |x: &i64| x - 1, |x: &i64| x.abs() as f64, 50);
/// hc.solve();
///
/// // Descends to the minimum at 0, then rejects every further move.
/// assert_eq!(*hc.solution(), 0);
/// assert_eq!(hc.solution_fitness(), 0.0);
/// assert_eq!(hc.history().len(), 100);
/// ```
pub struct HillClimber<G, T, F>
where
    T: FnMut(&G) -> G,
    F: FnMut(&G) -> f64,
{
    steps: usize,
    tweak: T,
    fitness: F,
    solution: G,
    solution_fitness: f64,
    history: Vec<f64>,
}

impl<G, T, F> HillClimber<G, T, F>
where
    T: FnMut(&G) -> G,
    F: FnMut(&G) -> f64,
{
    /// Creates a climber with an iteration budget, operators, and a
    /// starting solution.
    ///
    /// The starting solution is evaluated eagerly; that evaluation is
    /// not recorded in the history.
    pub fn new(steps: usize, tweak: T, mut fitness: F, init_sol: G) -> Self {
        let solution_fitness = fitness(&init_sol);
        Self {
            steps,
            tweak,
            fitness,
            solution: init_sol,
            solution_fitness,
            history: Vec::new(),
        }
    }
}

impl<G, T, F> Solver for HillClimber<G, T, F>
where
    T: FnMut(&G) -> G,
    F: FnMut(&G) -> f64,
{
    type Genome = G;

    fn history(&self) -> &[f64] {
        &self.history
    }

    fn solution(&self) -> &G {
        &self.solution
    }

    fn solution_fitness(&self) -> f64 {
        self.solution_fitness
    }

    fn solve(&mut self) {
        for _ in 0..self.steps {
            let candidate = (self.tweak)(&self.solution);
            let f = (self.fitness)(&candidate);
            self.history.push(f);

            if f < self.solution_fitness {
                self.solution = candidate;
                self.solution_fitness = f;
            }
        }
    }
}
