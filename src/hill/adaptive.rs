//! Hill climbing with one-fifth success-rule strength control.

use crate::solver::Solver;
use std::collections::VecDeque;

/// Initial mutation strength when none is configured.
pub const DEFAULT_STRENGTH: f64 = 0.5;

/// Length of the success window when none is configured.
pub const DEFAULT_WINDOW: usize = 5;

/// Multiplicative increase applied to the strength when recent
/// successes exceed the one-fifth threshold.
const GROWTH_FACTOR: f64 = 1.3;

/// Divisor applied when recent successes fall below the threshold.
/// Deliberately close to 1: growth is fast, decay is slow.
const DECAY_DIVISOR: f64 = 1.0001;

/// Greedy hill climbing with self-adaptive mutation strength.
///
/// Acceptance is identical to [`HillClimber`](super::HillClimber):
/// strict improvement only. In addition, `tweak` receives a positive
/// `strength` parameter that the solver adapts with the classic
/// one-fifth success rule from evolution-strategy step-size control:
///
/// 1. After each step, push the improvement outcome into a sliding
///    window of the last `W` steps (`W` fixed at construction,
///    default 5).
/// 2. Count the successes in the window and compare against the
///    threshold `W / 5`.
/// 3. Above the threshold the search is succeeding too often, so the
///    strength grows by ×1.3; below it the strength shrinks by
///    ÷1.0001; at exactly the threshold it is left unchanged.
///
/// During the first `W - 1` steps the window is shorter than `W` but
/// the threshold comparison is the same, so a lone early success
/// lands exactly on the threshold for the default window.
///
/// # Examples
///
/// ```
/// use stochsearch::{hill::AdaptiveHillClimber, Solver};
/// use rand::{rngs::StdRng, Rng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tweak = move |x: &f64, strength: f64| x + rng.random_range(-strength..strength);
///
/// let mut hc = AdaptiveHillClimber::new(2_000, tweak, |x: &f64| x * x, 10.0)
///     .with_strength(1.0);
/// hc.solve();
///
/// assert!(hc.solution_fitness() < 1.0);
/// assert_eq!(hc.history().len(), 2_000);
/// ```
pub struct AdaptiveHillClimber<G, T, F>
where
    T: FnMut(&G, f64) -> G,
    F: FnMut(&G) -> f64,
{
    steps: usize,
    tweak: T,
    fitness: F,
    solution: G,
    solution_fitness: f64,
    history: Vec<f64>,
    strength: f64,
    window: VecDeque<bool>,
    window_size: usize,
}

impl<G, T, F> AdaptiveHillClimber<G, T, F>
where
    T: FnMut(&G, f64) -> G,
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
            strength: DEFAULT_STRENGTH,
            window: VecDeque::with_capacity(DEFAULT_WINDOW),
            window_size: DEFAULT_WINDOW,
        }
    }

    /// Sets the initial mutation strength.
    ///
    /// # Panics
    /// Panics if `strength` is not positive.
    pub fn with_strength(mut self, strength: f64) -> Self {
        assert!(strength > 0.0, "strength must be positive");
        self.strength = strength;
        self
    }

    /// Sets the success-window length.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn with_window(mut self, size: usize) -> Self {
        assert!(size > 0, "window size must be at least 1");
        self.window_size = size;
        self
    }

    /// The current mutation strength.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Records one step outcome and adapts the strength.
    fn adapt(&mut self, improved: bool) {
        self.window.push_back(improved);
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }

        let successes = self.window.iter().filter(|&&b| b).count() as f64;
        let threshold = self.window_size as f64 / 5.0;

        if successes > threshold {
            self.strength *= GROWTH_FACTOR;
        } else if successes < threshold {
            self.strength /= DECAY_DIVISOR;
        }
    }
}

impl<G, T, F> Solver for AdaptiveHillClimber<G, T, F>
where
    T: FnMut(&G, f64) -> G,
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
            let candidate = (self.tweak)(&self.solution, self.strength);
            let f = (self.fitness)(&candidate);
            self.history.push(f);

            let improved = f < self.solution_fitness;
            self.adapt(improved);

            if improved {
                self.solution = candidate;
                self.solution_fitness = f;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Decrements and ignores the strength, so with `fitness = |x|`
    // and a positive start every step strictly improves.
    fn decrement(x: &i64, _strength: f64) -> i64 {
        x - 1
    }

    // Jumps straight to 0, so only the first step improves on a
    // positive starting fitness; every later step plateaus at 1.
    fn jump_to_zero(_x: &i64, _strength: f64) -> i64 {
        0
    }

    fn step_fitness(x: &i64) -> f64 {
        if *x == 10 {
            2.0
        } else {
            1.0
        }
    }

    #[test]
    fn test_strength_grows_while_succeeding() {
        let mut hc = AdaptiveHillClimber::new(5, decrement, |x: &i64| x.abs() as f64, 1_000);
        hc.solve();

        // Step 1 puts a single success in the window, which sits
        // exactly on the 5/5 = 1 threshold: no change. Steps 2..=5
        // each exceed it: four growth applications.
        let expected = DEFAULT_STRENGTH * GROWTH_FACTOR.powi(4);
        assert!((hc.strength() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_strength_decays_while_stagnating() {
        // Constant fitness: no candidate is ever a strict improvement.
        let mut hc =
            AdaptiveHillClimber::new(100, |x: &i32, _| *x, |_: &i32| 1.0, 0).with_strength(2.0);
        hc.solve();

        let expected = 2.0 / DECAY_DIVISOR.powi(100);
        assert!((hc.strength() - expected).abs() < 1e-12);
        assert_eq!(*hc.solution(), 0);
    }

    #[test]
    fn test_strength_unchanged_at_threshold() {
        // History is [1, 1, 1, 1, 1] from an initial fitness of 2:
        // only the first step improves. One success in the default
        // window equals the threshold for all five steps, so the
        // strength stays at its initial value.
        let mut hc = AdaptiveHillClimber::new(5, jump_to_zero, step_fitness, 10);
        hc.solve();

        assert_eq!(hc.history(), &[1.0; 5]);
        assert!((hc.strength() - DEFAULT_STRENGTH).abs() < 1e-15);
    }

    #[test]
    fn test_strength_decays_once_success_leaves_window() {
        // Same setup, one more step: the lone success slides out of
        // the window, zero successes is below the threshold, decay.
        let mut hc = AdaptiveHillClimber::new(6, jump_to_zero, step_fitness, 10);
        hc.solve();

        let expected = DEFAULT_STRENGTH / DECAY_DIVISOR;
        assert!((hc.strength() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_custom_window_threshold() {
        // Window of 10 puts the threshold at 2. The lone first-step
        // success stays below it, so the strength decays every step.
        let mut hc = AdaptiveHillClimber::new(3, jump_to_zero, step_fitness, 10).with_window(10);
        hc.solve();

        let expected = DEFAULT_STRENGTH / DECAY_DIVISOR.powi(3);
        assert!((hc.strength() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_history_length_matches_budget() {
        let mut rng = StdRng::seed_from_u64(1);
        let tweak = move |x: &f64, s: f64| x + rng.random_range(-s..s);
        let mut hc = AdaptiveHillClimber::new(300, tweak, |x: &f64| x * x, 4.0);

        hc.solve();
        assert_eq!(hc.history().len(), 300);
        hc.solve();
        assert_eq!(hc.history().len(), 600);
    }

    #[test]
    #[should_panic(expected = "strength must be positive")]
    fn test_nonpositive_strength_rejected() {
        let _ = AdaptiveHillClimber::new(1, decrement, |x: &i64| *x as f64, 0).with_strength(0.0);
    }

    #[test]
    fn test_sphere_convergence() {
        let mut rng = StdRng::seed_from_u64(42);
        let tweak = move |x: &Vec<f64>, s: f64| {
            let mut next = x.clone();
            let i = rng.random_range(0..next.len());
            next[i] += rng.random_range(-s..s);
            next
        };
        let fitness = |x: &Vec<f64>| x.iter().map(|v| v * v).sum::<f64>();

        let mut hc =
            AdaptiveHillClimber::new(5_000, tweak, fitness, vec![3.0; 5]).with_strength(1.0);
        hc.solve();

        assert!(
            hc.solution_fitness() < 0.5,
            "expected near-zero cost for 5D sphere, got {}",
            hc.solution_fitness()
        );
    }
}
