use crate::sequence::{IntoSequence, Sequence};

use super::for_each_while;

/// Tests whether every element of a sequence satisfies a predicate.
///
/// Stops at the first element that does not satisfy it.
/// Returns `true` for an empty sequence.
///
/// This corresponds to [`Iterator::all()`].
///
/// # Examples
///
/// ```
/// use cursor_seq::{algo::all, source::from_slice};
///
/// assert!(all(from_slice(&[2, 4, 6]), |&n| n % 2 == 0));
/// assert!(!all(from_slice(&[2, 3, 6]), |&n| n % 2 == 0));
/// assert!(all(from_slice::<i32>(&[]), |_| false));
/// ```
#[inline]
pub fn all<S, F>(seq: S, pred: F) -> bool
where
    S: IntoSequence,
    F: FnMut(S::Element) -> bool,
{
    let mut seq = seq.into_seq();
    let cursor = for_each_while(&mut seq, pred);
    seq.is_last(&cursor)
}

/// Tests whether no element of a sequence satisfies a predicate.
///
/// Stops at the first element that satisfies it.
/// Returns `true` for an empty sequence.
///
/// # Examples
///
/// ```
/// use cursor_seq::{algo::none, source::from_slice};
///
/// assert!(none(from_slice(&[1, 3, 5]), |&n| n % 2 == 0));
/// assert!(!none(from_slice(&[1, 2, 5]), |&n| n % 2 == 0));
/// ```
#[inline]
pub fn none<S, F>(seq: S, mut pred: F) -> bool
where
    S: IntoSequence,
    F: FnMut(S::Element) -> bool,
{
    let mut seq = seq.into_seq();
    let cursor = for_each_while(&mut seq, |item| !pred(item));
    seq.is_last(&cursor)
}

/// Tests whether some element of a sequence satisfies a predicate.
///
/// Stops at the first element that satisfies it.
/// Returns `false` for an empty sequence.
///
/// This corresponds to [`Iterator::any()`].
///
/// # Examples
///
/// ```
/// use cursor_seq::{algo::any, source::from_slice};
///
/// assert!(any(from_slice(&[1, 2, 5]), |&n| n % 2 == 0));
/// assert!(!any(from_slice::<i32>(&[]), |_| true));
/// ```
#[inline]
pub fn any<S, F>(seq: S, mut pred: F) -> bool
where
    S: IntoSequence,
    F: FnMut(S::Element) -> bool,
{
    let mut seq = seq.into_seq();
    let cursor = for_each_while(&mut seq, |item| !pred(item));
    !seq.is_last(&cursor)
}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::source::from_slice;
    use crate::test_utils::Probe;

    use super::{all, none};

    proptest! {
        #[test]
        fn quantifiers_agree_with_iterator(
            nums in propvec(any::<i32>(), ..=6),
        ) {
            quantifiers_agree_with_iterator_impl(nums)?;
        }

        #[test]
        fn quantifier_laws(
            nums in propvec(any::<i8>(), ..=6),
            threshold in any::<i8>(),
        ) {
            quantifier_laws_impl(nums, threshold)?;
        }
    }

    fn quantifiers_agree_with_iterator_impl(nums: Vec<i32>) -> TestCaseResult {
        let pred = |&num: &i32| num > 0;

        let mut seq = Probe::new(from_slice(&nums));
        prop_assert_eq!(all(&mut seq, pred), nums.iter().all(pred));
        // Reads up to and including the deciding element.
        let decided_at = nums.iter().position(|num| !pred(num));
        prop_assert_eq!(seq.reads(), decided_at.map_or(nums.len(), |pos| pos + 1));

        let mut seq = Probe::new(from_slice(&nums));
        prop_assert_eq!(super::any(&mut seq, pred), nums.iter().any(pred));
        let decided_at = nums.iter().position(pred);
        prop_assert_eq!(seq.reads(), decided_at.map_or(nums.len(), |pos| pos + 1));

        let mut seq = Probe::new(from_slice(&nums));
        prop_assert_eq!(none(&mut seq, pred), !nums.iter().any(pred));
        prop_assert_eq!(seq.reads(), decided_at.map_or(nums.len(), |pos| pos + 1));

        Ok(())
    }

    fn quantifier_laws_impl(nums: Vec<i8>, threshold: i8) -> TestCaseResult {
        let pred = |&num: &i8| num < threshold;

        prop_assert_eq!(
            all(from_slice(&nums), pred),
            !super::any(from_slice(&nums), |num| !pred(num)),
        );
        prop_assert_eq!(
            none(from_slice(&nums), pred),
            !super::any(from_slice(&nums), pred),
        );

        Ok(())
    }
}
