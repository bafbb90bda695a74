//! Settings for the [ComplexityDemo](crate::complexity::ComplexityDemo).

use std::ops::RangeInclusive;

/// Size and value range of the generated data and the cap on the exponential demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of random values drawn by `generate_data`
    pub data_size: usize,
    /// Range the random values are drawn from
    pub value_range: RangeInclusive<i64>,
    /// Largest `n` the recursive Fibonacci demo will run with. Every step up roughly doubles
    /// the running time.
    pub fibonacci_cap: u32,
}

impl DemoConfig {
    pub fn with_data_size(mut self, data_size: usize) -> Self {
        self.data_size = data_size;
        self
    }

    pub fn with_value_range(mut self, value_range: RangeInclusive<i64>) -> Self {
        self.value_range = value_range;
        self
    }

    pub fn with_fibonacci_cap(mut self, fibonacci_cap: u32) -> Self {
        self.fibonacci_cap = fibonacci_cap;
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            data_size: 1000,
            value_range: 1..=1000,
            fibonacci_cap: 35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = DemoConfig::default().with_data_size(10).with_fibonacci_cap(20);
        assert_eq!(config.data_size, 10);
        assert_eq!(config.fibonacci_cap, 20);
        assert_eq!(config.value_range, 1..=1000);
    }
}
