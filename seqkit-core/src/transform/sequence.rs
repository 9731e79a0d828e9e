//! Numeric sequence transformations

use crate::constants::TRIPLE_FACTOR;
use crate::Numeric;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Sum every element, starting from zero
pub fn sum<T: Numeric>(values: &[T]) -> T {
    values.iter().fold(T::ZERO, |total, &value| total.accumulate(value))
}

/// Index of the first element strictly below zero
pub fn first_negative<T: Numeric>(values: &[T]) -> Option<usize> {
    values.iter().position(|value| value.is_negative())
}

/// Return just the first and last element
///
/// An empty input gives an empty result; a single element is repeated.
#[cfg(feature = "alloc")]
pub fn bookend<T: Copy>(values: &[T]) -> Vec<T> {
    match values {
        [] => Vec::new(),
        [only] => alloc::vec![*only, *only],
        [first, .., last] => alloc::vec![*first, *last],
    }
}

/// Multiply every element by three
#[cfg(feature = "alloc")]
pub fn triple_all<T: Numeric>(values: &[T]) -> Vec<T> {
    values.iter().map(|value| value.scale(TRIPLE_FACTOR)).collect()
}

/// Insert a running sum after the first negative element
///
/// With a negative at index `i`, the sum of `values[..i]` is inserted at
/// `i + 1`. Without one, the sum of the whole sequence is appended.
#[cfg(feature = "alloc")]
pub fn inject_sum_after_first_negative<T: Numeric>(values: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(values.len() + 1);

    match first_negative(values) {
        Some(index) => {
            let (head, tail) = values.split_at(index + 1);
            result.extend_from_slice(head);
            result.push(sum(&values[..index]));
            result.extend_from_slice(tail);
        }
        None => {
            result.extend_from_slice(values);
            result.push(sum(values));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum::<i32>(&[]), 0);
        assert_eq!(sum(&[1, 2, 3]), 6);
        assert_eq!(sum(&[1.5, -0.5]), 1.0);
        assert_eq!(sum(&[i64::MAX, 1]), i64::MAX);
    }

    #[test]
    fn test_first_negative() {
        assert_eq!(first_negative::<i32>(&[]), None);
        assert_eq!(first_negative(&[1, 9, -5, 7, -2]), Some(2));
        assert_eq!(first_negative(&[-1.0, 2.0]), Some(0));
        assert_eq!(first_negative(&[0.0, -0.0, 3.0]), None);
    }

    #[cfg(feature = "alloc")]
    mod owned {
        use super::super::*;
        use alloc::vec;

        #[test]
        fn test_bookend() {
            assert!(bookend::<i32>(&[]).is_empty());
            assert_eq!(bookend(&[5]), vec![5, 5]);
            assert_eq!(bookend(&[1, 2]), vec![1, 2]);
            assert_eq!(bookend(&[1, 2, 3]), vec![1, 3]);
            assert_eq!(bookend(&[4.5, 0.0, -1.0, 8.25]), vec![4.5, 8.25]);
        }

        #[test]
        fn test_triple_all() {
            assert_eq!(triple_all(&[1, 2, 3]), vec![3, 6, 9]);
            assert!(triple_all::<f64>(&[]).is_empty());
            assert_eq!(triple_all(&[-2.5, 0.0]), vec![-7.5, 0.0]);
            assert_eq!(triple_all(&[u32::MAX]), vec![u32::MAX]);
        }

        #[test]
        fn test_inject_after_negative() {
            assert_eq!(
                inject_sum_after_first_negative(&[1, 9, -5, 7]),
                vec![1, 9, -5, 10, 7]
            );
            // Only the first negative gets a sum
            assert_eq!(
                inject_sum_after_first_negative(&[1, -2, 3, -4]),
                vec![1, -2, 1, 3, -4]
            );
            // Leading negative sums nothing
            assert_eq!(
                inject_sum_after_first_negative(&[-3, 4]),
                vec![-3, 0, 4]
            );
            // Trailing negative
            assert_eq!(
                inject_sum_after_first_negative(&[2, 3, -1]),
                vec![2, 3, -1, 5]
            );
        }

        #[test]
        fn test_inject_without_negative() {
            assert_eq!(
                inject_sum_after_first_negative(&[1, 9, 7]),
                vec![1, 9, 7, 17]
            );
            assert_eq!(inject_sum_after_first_negative::<i32>(&[]), vec![0]);
            assert_eq!(
                inject_sum_after_first_negative(&[0.5, 0.25]),
                vec![0.5, 0.25, 0.75]
            );
        }

        #[test]
        fn test_input_untouched() {
            let input = vec![1, 9, -5, 7];
            let _ = bookend(&input);
            let _ = triple_all(&input);
            let _ = inject_sum_after_first_negative(&input);
            assert_eq!(input, vec![1, 9, -5, 7]);
        }
    }
}
