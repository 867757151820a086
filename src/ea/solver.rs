//! Steady-state evolutionary loop.

use super::config::EaConfig;
use super::types::{Individual, PopulationInit};
use crate::solver::Solver;
use log::trace;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Steady-state (μ+λ) evolutionary search.
///
/// Every generation:
///
/// 1. **Parent selection**: sample `offspring` distinct parents from
///    the population, uniformly at random without replacement. There
///    is no fitness bias at this stage.
/// 2. **Variation**: mutate each parent's genome into one child via
///    `tweak`, evaluate it, and record the fitness in the history.
/// 3. **Replacement**: merge the children into the population, sort
///    ascending by fitness, and truncate back to the fixed population
///    size. The sort is stable, so equal-fitness individuals keep
///    their relative order and incumbents win ties against children.
///
/// [`solution`](Solver::solution) and
/// [`solution_fitness`](Solver::solution_fitness) report the
/// individual at index 0, the best after the most recent generation.
///
/// The solver owns a seeded random source, so a run is fully
/// reproducible given the same configuration, initial population, and
/// deterministic `tweak`/`fitness` closures.
///
/// # Examples
///
/// ```
/// use stochsearch::{ea::{EaConfig, EaSteadyState, PopulationInit}, Solver};
/// use rand::{rngs::StdRng, Rng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let tweak = move |x: &f64| x + rng.random_range(-0.5..0.5);
///
/// let config = EaConfig::default().with_generations(100).with_offspring(5);
/// let init = PopulationInit::Cloned { size: 10, genome: 8.0 };
/// let mut ea = EaSteadyState::new(config, tweak, |x: &f64| x * x, init);
/// ea.solve();
///
/// assert!(ea.solution_fitness() < 8.0 * 8.0);
/// assert_eq!(ea.history().len(), 100 * 5);
/// ```
pub struct EaSteadyState<G, T, F, R = StdRng>
where
    G: Clone,
    T: FnMut(&G) -> G,
    F: FnMut(&G) -> f64,
    R: Rng,
{
    generations: usize,
    offspring: usize,
    tweak: T,
    fitness: F,
    population: Vec<Individual<G>>,
    pop_size: usize,
    history: Vec<f64>,
    rng: R,
}

impl<G, T, F> EaSteadyState<G, T, F, StdRng>
where
    G: Clone,
    T: FnMut(&G) -> G,
    F: FnMut(&G) -> f64,
{
    /// Creates a solver whose random source is seeded from
    /// [`EaConfig::seed`].
    ///
    /// # Panics
    /// See [`with_rng`](EaSteadyState::with_rng).
    pub fn new(config: EaConfig, tweak: T, fitness: F, init: PopulationInit<G>) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, tweak, fitness, init, rng)
    }
}

impl<G, T, F, R> EaSteadyState<G, T, F, R>
where
    G: Clone,
    T: FnMut(&G) -> G,
    F: FnMut(&G) -> f64,
    R: Rng,
{
    /// Creates a solver with a caller-supplied random source.
    ///
    /// For [`PopulationInit::Cloned`] the seed genome is cloned `size`
    /// times and every copy is evaluated independently; those
    /// evaluations are not recorded in the history. A
    /// [`PopulationInit::Prebuilt`] population is used as-is and not
    /// re-sorted until the first generation completes.
    ///
    /// # Panics
    /// Panics if the configuration is invalid, the population is
    /// empty, or `offspring` exceeds the population size.
    pub fn with_rng(
        config: EaConfig,
        tweak: T,
        mut fitness: F,
        init: PopulationInit<G>,
        rng: R,
    ) -> Self {
        config.validate().expect("invalid EaConfig");

        let population: Vec<Individual<G>> = match init {
            PopulationInit::Cloned { size, genome } => (0..size)
                .map(|_| Individual::evaluated(genome.clone(), &mut fitness))
                .collect(),
            PopulationInit::Prebuilt(individuals) => individuals,
        };

        let pop_size = population.len();
        assert!(pop_size > 0, "population must not be empty");
        assert!(
            config.offspring <= pop_size,
            "offspring must not exceed the population size"
        );

        Self {
            generations: config.generations,
            offspring: config.offspring,
            tweak,
            fitness,
            population,
            pop_size,
            history: Vec::new(),
            rng,
        }
    }

    /// Read-only view of the population. Sorted ascending by fitness
    /// after every generation; before the first generation it is in
    /// initialization order.
    pub fn population(&self) -> &[Individual<G>] {
        &self.population
    }

    fn step_generation(&mut self) {
        let parents = index::sample(&mut self.rng, self.pop_size, self.offspring);

        let mut children = Vec::with_capacity(self.offspring);
        for idx in parents.iter() {
            let genome = (self.tweak)(self.population[idx].genome());
            let fitness = (self.fitness)(&genome);
            self.history.push(fitness);
            children.push(Individual::with_fitness(genome, fitness));
        }

        self.population.append(&mut children);
        // Stable sort: ties keep their relative order, incumbents first.
        self.population
            .sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
        self.population.truncate(self.pop_size);
    }
}

impl<G, T, F, R> Solver for EaSteadyState<G, T, F, R>
where
    G: Clone,
    T: FnMut(&G) -> G,
    F: FnMut(&G) -> f64,
    R: Rng,
{
    type Genome = G;

    fn history(&self) -> &[f64] {
        &self.history
    }

    fn solution(&self) -> &G {
        self.population[0].genome()
    }

    fn solution_fitness(&self) -> f64 {
        self.population[0].fitness()
    }

    fn solve(&mut self) {
        for generation in 0..self.generations {
            self.step_generation();
            trace!(
                "generation {generation}: best fitness {}",
                self.population[0].fitness()
            );
        }
    }
}
