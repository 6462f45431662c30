use crate::sequence::{BidirectionalSequence, BoundedSequence, SwapSequence};

/// Reverses the elements of a sequence in place.
///
/// A leading cursor walks forwards from the first position and a trailing one walks
/// backwards from the last, swapping elements until they meet.
/// This performs `n / 2` swaps for a sequence of `n` elements, and none when `n <= 1`.
///
/// Cursors obtained before the call still denote the same positions,
/// which now hold other elements.
///
/// # Examples
///
/// ```
/// use cursor_seq::{algo::inplace_reverse, source::from_slice_mut};
///
/// let mut nums = [1, 2, 3, 4, 5];
/// inplace_reverse(&mut from_slice_mut(&mut nums));
///
/// assert_eq!(nums, [5, 4, 3, 2, 1]);
/// ```
pub fn inplace_reverse<S>(seq: &mut S)
where
    S: BidirectionalSequence + BoundedSequence + SwapSequence + ?Sized,
{
    let mut first = seq.first();
    let mut last = seq.last();

    while first != last {
        seq.dec(&mut last);
        if first == last {
            break;
        }

        seq.swap_at(&first, &last);
        seq.inc(&mut first);
    }
}
