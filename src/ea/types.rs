//! Individuals and population initialization.

/// A genome paired with its fitness.
///
/// Fitness is computed eagerly at construction, so an individual never
/// exists in an unevaluated state. Once built, the fitness is
/// immutable; the solver replaces individuals rather than re-scoring
/// them.
#[derive(Debug, Clone)]
pub struct Individual<G> {
    genome: G,
    fitness: f64,
}

impl<G> Individual<G> {
    /// Builds an individual by evaluating `genome` with `fitness`.
    pub fn evaluated<F>(genome: G, fitness: &mut F) -> Self
    where
        F: FnMut(&G) -> f64,
    {
        let fitness = fitness(&genome);
        Self { genome, fitness }
    }

    /// Builds an individual from an already-known fitness value.
    pub fn with_fitness(genome: G, fitness: f64) -> Self {
        Self { genome, fitness }
    }

    /// The genome.
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// The fitness. Lower is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// How [`EaSteadyState`](super::EaSteadyState) obtains its initial
/// population.
///
/// The population size is fixed by this choice for the lifetime of
/// the solver: `size` clones for [`Cloned`](PopulationInit::Cloned),
/// the vector length for [`Prebuilt`](PopulationInit::Prebuilt).
pub enum PopulationInit<G> {
    /// Clone one seed genome `size` times, evaluating each copy
    /// independently at solver construction.
    Cloned {
        /// Population size.
        size: usize,
        /// The genome every initial individual starts from.
        genome: G,
    },

    /// Use a pre-built population as-is, in the given order.
    Prebuilt(Vec<Individual<G>>),
}
