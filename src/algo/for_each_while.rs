use crate::sequence::Sequence;

/// Visits the elements of a sequence in order, until `pred` returns `false`
/// or the sequence ends.
///
/// Returns the cursor where the traversal stopped: either the last cursor
/// (`pred` held for every element), or the cursor of the first element
/// for which `pred` returned `false`. That cursor is not advanced.
///
/// `pred` is called at most once per element, in sequence order, and never again
/// after it has returned `false`.
///
/// This corresponds to [`Iterator::try_for_each()`] with a boolean in place of
/// [`ControlFlow`](std::ops::ControlFlow).
///
/// # Examples
///
/// ```
/// use cursor_seq::{algo::for_each_while, prelude::*, source::from_slice};
///
/// let mut seq = from_slice(&[1, 2, 30, 4]);
/// let mut visited = vec![];
///
/// let cursor = for_each_while(&mut seq, |&n| {
///     visited.push(n);
///     n < 10
/// });
///
/// assert_eq!(visited, [1, 2, 30]);
/// assert_eq!(seq.read_at(&cursor), &30);
/// ```
pub fn for_each_while<S, F>(seq: &mut S, mut pred: F) -> S::Cursor
where
    S: Sequence + ?Sized,
    F: FnMut(S::Element) -> bool,
{
    let mut cursor = seq.first();
    while !seq.is_last(&cursor) {
        if !pred(seq.read_at(&cursor)) {
            break;
        }

        seq.inc(&mut cursor);
    }

    cursor
}

/// Calls `f` on every element of a sequence, in order.
///
/// # Examples
///
/// ```
/// use cursor_seq::{algo::for_each, source::from_slice};
///
/// let mut sum = 0;
/// for_each(from_slice(&[1, 2, 3]), |&n| sum += n);
///
/// assert_eq!(sum, 6);
/// ```
#[inline]
pub fn for_each<S, F>(seq: S, mut f: F)
where
    S: crate::sequence::IntoSequence,
    F: FnMut(S::Element),
{
    for_each_while(&mut seq.into_seq(), |item| {
        f(item);
        true
    });
}

/// Returns the number of elements of a sequence, traversing all of it.
///
/// Elements are read, so sequences producing them lazily do produce them.
#[inline]
pub fn count<S>(seq: S) -> usize
where
    S: crate::sequence::IntoSequence,
{
    let mut count = 0;
    for_each(seq, |_| count += 1);
    count
}

/// Returns the cursor of the first element satisfying `pred`,
/// or the last cursor if there is none.
///
/// # Examples
///
/// ```
/// use cursor_seq::{algo::find, prelude::*, source::from_slice};
///
/// let mut seq = from_slice(&["a", "bb", "ccc"]);
///
/// let cursor = find(&mut seq, |s| s.len() == 2);
/// assert_eq!(seq.read_at(&cursor), &"bb");
///
/// let cursor = find(&mut seq, |s| s.is_empty());
/// assert!(seq.is_last(&cursor));
/// ```
#[inline]
pub fn find<S, F>(seq: &mut S, mut pred: F) -> S::Cursor
where
    S: Sequence + ?Sized,
    F: FnMut(S::Element) -> bool,
{
    for_each_while(seq, |item| !pred(item))
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::prelude::*;
    use crate::source::{from_iter, from_slice};

    use super::*;

    #[test]
    fn empty_sequence_never_calls_pred() {
        let mut seq = from_slice::<i32>(&[]);
        let cursor = for_each_while(&mut seq, |_| panic!("no element to visit"));

        assert!(seq.is_last(&cursor));
        assert_eq!(count(seq), 0);
    }

    #[test]
    fn stops_on_single_pass_source() {
        let mut seq = from_iter([1, 2, 3, 4, 5].into_iter());
        let cursor = for_each_while(&mut seq, |n| n < 3);

        assert_eq!(seq.read_at(&cursor), 3);
        // The rejected element is still the current one.
        assert_eq!(seq.iter_from(cursor).collect::<Vec<_>>(), [3, 4, 5]);
    }

    #[test]
    fn count_and_for_each() {
        let mut seq = from_slice(&[5, 6, 7]);
        assert_eq!(seq.count(), 3);

        let mut seen = vec![];
        seq.for_each(|&n| seen.push(n));
        assert_eq!(seen, [5, 6, 7]);
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use std::cell::Cell;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;
    use crate::source::from_slice;
    use crate::test_utils::Probe;

    use super::for_each_while;

    proptest! {
        #[test]
        fn visits_prefix_once(
            nums in propvec(any::<i8>(), ..=9),
            threshold in any::<i8>(),
        ) {
            visits_prefix_once_impl(nums, threshold)?;
        }
    }

    fn visits_prefix_once_impl(nums: Vec<i8>, threshold: i8) -> TestCaseResult {
        let rejected_at = nums.iter().position(|&n| n >= threshold);
        let calls = Cell::new(0_usize);
        let mut visited = vec![];

        let mut seq = Probe::new(from_slice(&nums));
        let cursor = for_each_while(&mut seq, |&n| {
            calls.set(calls.get() + 1);
            visited.push(n);
            n < threshold
        });

        let expected_len = rejected_at.map_or(nums.len(), |pos| pos + 1);
        prop_assert_eq!(calls.get(), expected_len);
        prop_assert_eq!(&visited[..], &nums[..expected_len]);
        prop_assert_eq!(seq.reads(), expected_len);

        match rejected_at {
            Some(pos) => {
                prop_assert!(!seq.is_last(&cursor));
                prop_assert_eq!(cursor, pos);
            }
            None => prop_assert!(seq.is_last(&cursor)),
        }

        Ok(())
    }
}
