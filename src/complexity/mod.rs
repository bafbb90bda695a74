//! Stand-alone routines that illustrate asymptotic running times, each returning its result
//! together with the wall-clock time it took.
//!
//! | Complexity | Growth       | Routine                        |
//! |------------|--------------|--------------------------------|
//! | O(1)       | Constant     | [constant_access]              |
//! | O(log n)   | Logarithmic  | [binary_search]                |
//! | O(n)       | Linear       | [linear_search]                |
//! | O(n log n) | Linearithmic | [merge_sort]                   |
//! | O(n²)      | Quadratic    | [bubble_sort]                  |
//! | O(2ⁿ)      | Exponential  | [fibonacci]                    |
//!
//! [ComplexityDemo] bundles the routines with a randomly generated data set.

pub mod fibonacci;
pub mod search;
pub mod sort;

pub use fibonacci::fibonacci;
pub use search::{binary_search, linear_search};
pub use sort::{bubble_sort, merge_sort};

use crate::{DemoConfig, DynamicSequence, PrimerError};
use core::fmt;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;
use tracing_attributes::instrument;

/// Result of a routine and how long it ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<R> {
    pub result: R,
    pub elapsed: Duration,
}

impl<R> Timed<R> {
    pub fn map<S>(self, f: impl FnOnce(R) -> S) -> Timed<S> {
        Timed {
            result: f(self.result),
            elapsed: self.elapsed,
        }
    }
}

pub(crate) fn timed<R>(routine: impl FnOnce() -> R) -> Timed<R> {
    let start = Instant::now();
    let result = routine();
    Timed {
        result,
        elapsed: start.elapsed(),
    }
}

/// First element of `data`. O(1) regardless of its length.
pub fn constant_access<T: Clone>(data: &[T]) -> Timed<Option<T>> {
    timed(|| data.first().cloned())
}

/// Asymptotic growth classes, slowest growing first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Exponential,
}

impl Complexity {
    pub const ALL: [Complexity; 6] = [
        Complexity::Constant,
        Complexity::Logarithmic,
        Complexity::Linear,
        Complexity::Linearithmic,
        Complexity::Quadratic,
        Complexity::Exponential,
    ];

    /// Big O notation, e.g. `O(n log n)`
    pub fn notation(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::Linear => "O(n)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Quadratic => "O(n²)",
            Complexity::Exponential => "O(2ⁿ)",
        }
    }

    pub fn growth(&self) -> &'static str {
        match self {
            Complexity::Constant => "Constant",
            Complexity::Logarithmic => "Logarithmic",
            Complexity::Linear => "Linear",
            Complexity::Linearithmic => "Linearithmic",
            Complexity::Quadratic => "Quadratic",
            Complexity::Exponential => "Exponential",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// A random data set (and a sorted copy of it) to run the routines on.
///
/// All data-driven demos return `None` until [ComplexityDemo::generate_data] has produced a
/// non-empty data set.
#[derive(Debug, Clone, Default)]
pub struct ComplexityDemo {
    config: DemoConfig,
    data: DynamicSequence<i64>,
    sorted_data: DynamicSequence<i64>,
}

impl ComplexityDemo {
    pub fn new(config: DemoConfig) -> Self {
        ComplexityDemo {
            config,
            data: DynamicSequence::new(),
            sorted_data: DynamicSequence::new(),
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn data(&self) -> &DynamicSequence<i64> {
        &self.data
    }

    pub fn sorted_data(&self) -> &DynamicSequence<i64> {
        &self.sorted_data
    }

    /// Replaces the data set with `config.data_size` random values
    pub fn generate_data<R: Rng>(&mut self, rng: &mut R) -> Result<(), PrimerError> {
        self.generate_data_of_size(self.config.data_size, rng)
    }

    /// Replaces the data set with `size` values drawn from `config.value_range`.
    ///
    /// Fails on an empty range and leaves the current data set untouched.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn generate_data_of_size<R: Rng>(&mut self, size: usize, rng: &mut R) -> Result<(), PrimerError> {
        let range = self.config.value_range.clone();
        if range.is_empty() {
            return Err(PrimerError::EmptyValueRange {
                start: *range.start(),
                end: *range.end(),
            });
        }
        self.data = (0..size).map(|_| rng.random_range(range.clone())).collect();
        self.sorted_data = merge_sort(self.data.as_slice()).result;
        Ok(())
    }

    /// O(1): reads the first element
    pub fn constant_time(&self) -> Option<Timed<i64>> {
        self.log(Complexity::Constant);
        let access = constant_access(self.data.as_slice());
        access.result.map(|first| Timed {
            result: first,
            elapsed: access.elapsed,
        })
    }

    /// O(log n): binary search in the sorted copy
    pub fn logarithmic_time(&self, target: i64) -> Option<Timed<Option<usize>>> {
        self.log(Complexity::Logarithmic);
        self.has_data()
            .then(|| binary_search(self.sorted_data.as_slice(), &target))
    }

    /// O(n): linear search in the unsorted data
    pub fn linear_time(&self, target: i64) -> Option<Timed<Option<usize>>> {
        self.log(Complexity::Linear);
        self.has_data().then(|| linear_search(self.data.as_slice(), &target))
    }

    /// O(n log n): merge sort of the data
    pub fn linearithmic_time(&self) -> Option<Timed<DynamicSequence<i64>>> {
        self.log(Complexity::Linearithmic);
        self.has_data().then(|| merge_sort(self.data.as_slice()))
    }

    /// O(n²): bubble sort of the data
    pub fn quadratic_time(&self) -> Option<Timed<DynamicSequence<i64>>> {
        self.log(Complexity::Quadratic);
        self.has_data().then(|| bubble_sort(self.data.as_slice()))
    }

    /// O(2ⁿ): recursive Fibonacci, with `n` capped at `config.fibonacci_cap`
    pub fn exponential_time(&self, n: u32) -> Timed<u64> {
        self.log(Complexity::Exponential);
        let capped = n.min(self.config.fibonacci_cap);
        if capped < n {
            debug!(n, capped, "capping Fibonacci input");
        }
        fibonacci(capped)
    }

    fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    fn log(&self, complexity: Complexity) {
        debug!(%complexity, growth = complexity.growth(), len = self.data.len(), "running demo");
    }
}
