//! Post-processing helpers for solver histories.
//!
//! A history holds one fitness value per evaluation, in evaluation
//! order (see [`Solver::history`](crate::Solver::history)). Plotting
//! and reporting front-ends consume the raw scatter together with its
//! running minimum; nothing here feeds back into the solvers.

/// Prefix minimum of a history: entry `i` is the best fitness seen in
/// `history[..=i]`.
///
/// This is the convergence curve a plot draws on top of the raw
/// evaluation scatter.
///
/// # Examples
///
/// ```
/// use stochsearch::history::running_minimum;
///
/// let history = [5.0, 7.0, 3.0, 4.0, 2.0];
/// assert_eq!(running_minimum(&history), vec![5.0, 5.0, 3.0, 3.0, 2.0]);
/// ```
pub fn running_minimum(history: &[f64]) -> Vec<f64> {
    let mut best = f64::INFINITY;
    history
        .iter()
        .map(|&f| {
            best = best.min(f);
            best
        })
        .collect()
}

/// Summary of one solver history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    /// Number of fitness evaluations recorded.
    pub evaluations: usize,

    /// Best fitness in the history.
    pub best: f64,

    /// Index of the first evaluation that reached `best`.
    pub best_index: usize,

    /// Last recorded fitness.
    pub last: f64,
}

impl HistorySummary {
    /// Summarizes a history; `None` when it is empty.
    pub fn from_history(history: &[f64]) -> Option<Self> {
        let (&first, rest) = history.split_first()?;

        let mut best = first;
        let mut best_index = 0;
        for (i, &f) in rest.iter().enumerate() {
            if f < best {
                best = f;
                best_index = i + 1;
            }
        }

        Some(Self {
            evaluations: history.len(),
            best,
            best_index,
            last: history[history.len() - 1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_minimum_is_prefix_min() {
        let history = [3.0, 1.0, 4.0, 1.0, 0.5, 9.0];
        assert_eq!(
            running_minimum(&history),
            vec![3.0, 1.0, 1.0, 1.0, 0.5, 0.5]
        );
    }

    #[test]
    fn test_running_minimum_empty() {
        assert!(running_minimum(&[]).is_empty());
    }

    #[test]
    fn test_summary() {
        let history = [3.0, 1.0, 4.0, 1.0, 2.0];
        let summary = HistorySummary::from_history(&history).unwrap();
        assert_eq!(summary.evaluations, 5);
        assert_eq!(summary.best, 1.0);
        // First occurrence of the minimum wins.
        assert_eq!(summary.best_index, 1);
        assert_eq!(summary.last, 2.0);
    }

    #[test]
    fn test_summary_empty_history() {
        assert_eq!(HistorySummary::from_history(&[]), None);
    }
}
