//! Timing and call-counting wrappers.
//!
//! Observational helpers for the closures and solve calls this crate
//! works with. A wrapper never alters the value computed by the
//! function it wraps, only records something about the call.

use log::debug;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Runs `f` and logs its wall-clock duration at DEBUG under `label`.
///
/// Returns whatever `f` returns.
///
/// # Examples
///
/// ```
/// use stochsearch::instrument::timed;
///
/// let value = timed("expensive step", || 2 + 2);
/// assert_eq!(value, 4);
/// ```
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let value = f();
    debug!(
        "{label} finished in {:.4} s",
        start.elapsed().as_secs_f64()
    );
    value
}

/// Shared call counter handed out by [`counted`].
///
/// Cheaply cloneable; all clones observe the same count.
#[derive(Debug, Clone, Default)]
pub struct CallCount(Rc<Cell<u64>>);

impl CallCount {
    /// Number of calls made through the wrapped function so far.
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Wraps a unary by-reference function, returning the instrumented
/// function together with a counter tracking how often it was called.
///
/// The wrapped function's outputs are passed through unchanged, so a
/// counted `fitness` or `tweak` behaves identically inside a solver.
///
/// # Examples
///
/// ```
/// use stochsearch::instrument::counted;
///
/// let (mut double, calls) = counted(|x: &i32| x * 2);
/// assert_eq!(double(&3), 6);
/// assert_eq!(double(&5), 10);
/// assert_eq!(calls.get(), 2);
/// ```
pub fn counted<A, Ret, F>(mut f: F) -> (impl FnMut(&A) -> Ret, CallCount)
where
    A: ?Sized,
    F: FnMut(&A) -> Ret,
{
    let count = CallCount::default();
    let handle = count.clone();
    let wrapped = move |arg: &A| {
        handle.bump();
        f(arg)
    };
    (wrapped, count)
}
