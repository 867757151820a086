//! The contract shared by every solver in this crate.

/// A search algorithm that minimizes a fitness function over genomes
/// of type [`Genome`](Solver::Genome).
///
/// Construction fixes the iteration budget, the operators, and the
/// starting point; [`solve`](Solver::solve) then runs the whole budget
/// on the calling thread. Calling `solve` again does not restart the
/// search: it resumes from the current state with a fresh budget, so
/// the history keeps growing and the best solution so far is kept.
///
/// Callers program against this trait; the concrete solvers in
/// [`hill`](crate::hill) and [`ea`](crate::ea) implement it.
pub trait Solver {
    /// The solution representation.
    type Genome;

    /// All fitness values recorded so far, one entry per evaluation
    /// performed inside [`solve`](Solver::solve), in evaluation order.
    ///
    /// Diagnostic only. The algorithms never read their own history.
    fn history(&self) -> &[f64];

    /// The current best solution.
    fn solution(&self) -> &Self::Genome;

    /// Fitness of [`solution`](Solver::solution). Lower is better.
    fn solution_fitness(&self) -> f64;

    /// Runs the configured iteration budget to completion, mutating
    /// solver state in place.
    ///
    /// Panics raised by the caller-supplied `tweak` or `fitness`
    /// closures propagate unmodified.
    fn solve(&mut self);
}
