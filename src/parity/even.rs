//! Parity arithmetic: sums that only count even operands.

/// Returns `true` when `n` is divisible by two. Zero and negative even
/// numbers count as even.
pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

/// The even operands of `(a, b)`, in argument order.
pub fn even_operands(a: i32, b: i32) -> Vec<i32> {
    [a, b].into_iter().filter(|n| is_even(*n)).collect()
}

/// Adds the even operands and ignores the odd ones.
///
/// The result is widened to `i64`, so two `i32` operands can never overflow.
///
/// ```
/// use even_adder::parity::even::add_even;
///
/// assert_eq!(add_even(2, 2), 4);
/// assert_eq!(add_even(100, 1), 100);
/// assert_eq!(add_even(1, 2), 2);
/// ```
pub fn add_even(a: i32, b: i32) -> i64 {
    sum_even([a, b])
}

/// N-ary form of [`add_even`].
pub fn sum_even<I>(values: I) -> i64
where
    I: IntoIterator<Item = i32>,
{
    values
        .into_iter()
        .filter(|n| is_even(*n))
        .map(i64::from)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_even_success() {
        assert_eq!(add_even(2, 2), 4);
        assert_eq!(add_even(100, 1), 100);
        assert_eq!(add_even(1, 2), 2);
    }

    #[test]
    fn test_add_even_no_even_operand() {
        assert_eq!(add_even(1, 3), 0);
        assert_eq!(add_even(-7, 9), 0);
    }

    #[test]
    fn test_add_even_is_commutative() {
        for (a, b) in [(2, 2), (100, 1), (1, 2), (-4, 7), (0, 0)] {
            assert_eq!(add_even(a, b), add_even(b, a));
        }
    }

    #[test]
    fn test_add_even_negative_and_zero() {
        assert_eq!(add_even(-4, 6), 2);
        assert_eq!(add_even(0, 5), 0);
        assert_eq!(add_even(-3, -8), -8);
    }

    #[test]
    fn test_add_even_does_not_overflow() {
        let max_even = i32::MAX - 1;
        assert_eq!(add_even(max_even, max_even), 2 * i64::from(max_even));
        assert_eq!(add_even(i32::MIN, i32::MIN), 2 * i64::from(i32::MIN));
    }

    #[test]
    fn test_is_even() {
        assert!(is_even(2));
        assert!(!is_even(3));
        assert!(is_even(0));
        assert!(is_even(-2));
        assert!(!is_even(-1));
    }

    #[test]
    fn test_even_operands_keeps_order() {
        assert_eq!(even_operands(4, 2), vec![4, 2]);
        assert_eq!(even_operands(100, 1), vec![100]);
        assert!(even_operands(1, 1).is_empty());
    }

    #[test]
    fn test_sum_even_matches_add_even() {
        assert_eq!(sum_even([1, 2, 3, 4, 5, 6]), 12);
        assert_eq!(sum_even(Vec::<i32>::new()), 0);
        assert_eq!(sum_even([7, 10]), add_even(7, 10));
    }
}
