//! O(2ⁿ) recursion

use super::{timed, Timed};
use tracing_attributes::instrument;

/// Naive doubly recursive Fibonacci: `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n-1) + fib(n-2)`.
///
/// Running time grows exponentially and nothing here bounds it. Callers must cap `n`
/// (around 35 keeps it interactive, see [DemoConfig](crate::DemoConfig)). Results overflow
/// `u64` beyond `n = 93`, long after the running time has become impractical.
#[instrument(level = "debug")]
pub fn fibonacci(n: u32) -> Timed<u64> {
    timed(|| fib(n))
}

fn fib(n: u32) -> u64 {
    if n <= 1 {
        return n.into();
    }
    fib(n - 1) + fib(n - 2)
}
