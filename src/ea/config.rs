//! Steady-state EA configuration.

/// Configuration for [`EaSteadyState`](super::EaSteadyState).
///
/// # Examples
///
/// ```
/// use stochsearch::ea::EaConfig;
///
/// let config = EaConfig::default()
///     .with_generations(200)
///     .with_offspring(10)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EaConfig {
    /// Number of generations executed per `solve` call.
    ///
    /// Zero is allowed and makes `solve` a no-op.
    pub generations: usize,

    /// Number of parents sampled, and children produced, per
    /// generation. Must not exceed the population size, since parents
    /// are sampled without replacement.
    pub offspring: usize,

    /// Seed for the solver's own random source.
    ///
    /// The fixed default keeps runs reproducible unless the caller
    /// opts into a different seed or injects an RNG directly.
    pub seed: u64,
}

impl Default for EaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            offspring: 20,
            seed: 42,
        }
    }
}

impl EaConfig {
    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of offspring per generation.
    pub fn with_offspring(mut self, n: usize) -> Self {
        self.offspring = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.offspring == 0 {
            return Err("offspring must be at least 1".into());
        }
        Ok(())
    }
}
