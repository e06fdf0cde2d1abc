//! Chainable calculator holder and pure arithmetic.

/// A mutable value holder with chainable arithmetic operations.
///
/// Each operation replaces the stored result outright, so the holder always
/// reflects the most recent operation and nothing else. Construction
/// zero-initializes the result; there is no teardown.
///
/// ```
/// use specimen_ops::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.add(5, 3).result(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    result: i64,
}

impl Calculator {
    /// Create a calculator holding zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result to `a + b`, returning the calculator for chaining.
    pub fn add(&mut self, a: i64, b: i64) -> &mut Self {
        self.result = a + b;
        self
    }

    /// Set the result to `a - b`, returning the calculator for chaining.
    pub fn subtract(&mut self, a: i64, b: i64) -> &mut Self {
        self.result = a - b;
        self
    }

    /// The value stored by the most recent operation, or zero when fresh.
    #[must_use]
    pub const fn result(&self) -> i64 {
        self.result
    }
}

/// Product of `a` and `b`.
#[inline]
#[must_use]
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

#[cfg(test)]
mod tests {
    use super::{Calculator, multiply};

    #[test]
    fn fresh_calculator_holds_zero() {
        assert_eq!(Calculator::new().result(), 0);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(Calculator::default(), Calculator::new());
    }

    #[test]
    fn add_stores_the_sum() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(5, 3).result(), 8);
    }

    #[test]
    fn subtract_stores_the_difference() {
        let mut calc = Calculator::new();
        assert_eq!(calc.subtract(10, 4).result(), 6);
    }

    #[test]
    fn later_operations_overwrite_earlier_results() {
        // The first result is replaced, not combined into the second.
        let mut calc = Calculator::new();
        let value = calc.add(100, 200).subtract(9, 2).result();
        assert_eq!(value, 7);
    }

    #[test]
    fn operands_may_be_negative() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(-5, 3).result(), -2);
        assert_eq!(calc.subtract(-5, -3).result(), -2);
    }

    #[test]
    fn multiply_computes_the_product() {
        assert_eq!(multiply(3, 4), 12);
    }

    #[test]
    fn multiply_handles_zero_and_negatives() {
        assert_eq!(multiply(0, 99), 0);
        assert_eq!(multiply(-3, 4), -12);
        assert_eq!(multiply(-3, -4), 12);
    }
}
